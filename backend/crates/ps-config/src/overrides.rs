use crate::LogLevel;

/// Values supplied on the command line. `None` keeps the loaded value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<String>,
    pub no_color: bool,
}
