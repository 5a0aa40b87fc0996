use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid pairing board index {index}: expected -1 or a non-negative index")]
    InvalidLocation { index: i64 },

    #[error("Action #{position} rejected: {message}")]
    InvalidActionError { position: usize, message: String },
}

impl PairingError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PairingError::IoError(e) => format!("Could not read or write a file: {}", e),
            PairingError::SerializationError(e) => format!("The JSON input is malformed: {}", e),
            PairingError::CsvError(e) => format!("Could not build the pairs report: {}", e),
            PairingError::ConfigError { message } => format!("Configuration problem: {}", message),
            PairingError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            PairingError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            PairingError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            PairingError::InvalidLocation { index } => {
                format!("{} is not a pairing board index", index)
            }
            PairingError::InvalidActionError { position, message } => {
                format!("Action #{} cannot be applied: {}", position, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PairingError::IoError(_) => "Check that the file paths exist and are readable",
            PairingError::SerializationError(_) => {
                "Make sure the project and action files contain valid JSON"
            }
            PairingError::CsvError(_) => "Check that the output directory is writable",
            PairingError::ConfigError { .. }
            | PairingError::ConfigValidationError { .. }
            | PairingError::InvalidConfigValueError { .. }
            | PairingError::MissingConfigError { .. } => {
                "Review the TOML configuration and command line flags"
            }
            PairingError::InvalidLocation { .. } => {
                "Use -1 for the floating pool or the position of an existing pairing board"
            }
            PairingError::InvalidActionError { .. } => {
                "Fix the action script or rerun without --strict"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PairingError>;
