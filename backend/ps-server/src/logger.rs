use crate::error::{Result as ServerErrorResult, ServerError};

use ps_config::LoggingConfig;

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize the global logger with fern.
///
/// `config.file` set = append to that file, plain format. Otherwise stdout,
/// colored when `config.colored` is true.
pub fn initialize(config: &LoggingConfig) -> ServerErrorResult<()> {
    let level_filter = config.level.0;

    let output = build_dispatch(config)?;

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match config.file {
        Some(ref path) => info!("Logger initialized: level={level_filter:?}, file={path}"),
        None => info!("Logger initialized: level={level_filter:?}, stdout"),
    }

    Ok(())
}

fn build_dispatch(config: &LoggingConfig) -> ServerErrorResult<Dispatch> {
    if let Some(ref log_path) = config.file {
        // File output (no colors)
        let file = fern::log_file(log_path).map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {log_path}: {e}"),
        })?;

        return Ok(Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(file));
    }

    if config.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        return Ok(Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stdout()));
    }

    // Plain output for non-TTY (systemd, docker logs)
    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(std::io::stdout()))
}
