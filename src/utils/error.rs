use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("No passenger is booked in suite '{suite}'")]
    SuiteNotFound { suite: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidRosterValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported roster format: {path}")]
    UnsupportedRosterFormat { path: String },
}

impl PartyError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PartyError::IoError(e) => format!("Could not read or write a file: {}", e),
            PartyError::TomlError(_) | PartyError::SerializationError(_) => {
                "The roster file could not be parsed".to_string()
            }
            PartyError::SuiteNotFound { suite } => {
                format!("Nobody is staying in suite '{}', so there is no winner", suite)
            }
            PartyError::InvalidRosterValueError { field, reason, .. } => {
                format!("The roster has a bad '{}' entry: {}", field, reason)
            }
            PartyError::UnsupportedRosterFormat { path } => {
                format!("Don't know how to read roster file '{}'", path)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PartyError::IoError(_) => "Check that the path exists and is readable",
            PartyError::TomlError(_) | PartyError::SerializationError(_) => {
                "Check the file against the [[birthday_kids]] / [[passengers]] layout"
            }
            PartyError::SuiteNotFound { .. } => {
                "Add a passenger for that suite or pick another one with --suite"
            }
            PartyError::InvalidRosterValueError { .. } => {
                "Fix the listed entry in the roster file"
            }
            PartyError::UnsupportedRosterFormat { .. } => "Use a .toml or .json roster file",
        }
    }
}

pub type Result<T> = std::result::Result<T, PartyError>;
