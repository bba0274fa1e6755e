use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Can't set both mirror and upstream")]
    ConflictingRoles,
    #[error("Must set one of mirror and upstream")]
    MissingRole,
    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
    #[error("Unable to install logger: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}
