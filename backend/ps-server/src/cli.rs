use ps_config::{ConfigOverrides, LogLevel};

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ps-server")]
#[command(about = "Publish/subscribe relay over WebSockets")]
#[command(version)]
pub struct Cli {
    /// TOML config file (defaults are used when omitted)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Bind address [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, 0 picks a free port [default: 5000]
    #[arg(long, short)]
    pub port: Option<u16>,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Write logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<String>,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level,
            log_file: self.log_file.clone(),
            no_color: self.no_color,
        }
    }
}
