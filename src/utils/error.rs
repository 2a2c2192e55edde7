use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logger setup failed: {message}")]
    LoggerError { message: String },
}

impl DemoError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the terminal or log file is writable",
            DemoError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            DemoError::ConfigError { .. } => "Review the configuration file and CLI flags",
            DemoError::InvalidConfigValueError { .. } => {
                "Correct the highlighted field and run again"
            }
            DemoError::LoggerError { .. } => "Pick a different --log-file location",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
