use crate::domain::model::Direction;
use thiserror::Error;

/// Text printed in place of a translation when the input is rejected.
pub const INVALID_INPUT: &str = "Invalid input.";

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("Invalid input.")]
    InvalidInput { direction: Direction },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Environment variable '{name}' is not set")]
    MissingEnvVarError { name: String },
}

impl TelegramError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TelegramError::InvalidInput { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TelegramError::InvalidInput { .. } => INVALID_INPUT.to_string(),
            TelegramError::IoError(e) => format!("Could not read or write the console: {}", e),
            TelegramError::ConfigError { message } => format!("Configuration problem: {}", message),
            TelegramError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            TelegramError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            TelegramError::MissingEnvVarError { name } => {
                format!("The configuration refers to ${{{}}} but it is not set", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TelegramError::InvalidInput { direction: Direction::ToMorse } => {
                "Use only letters, digits and single spaces between words"
            }
            TelegramError::InvalidInput { direction: Direction::FromMorse } => {
                "Use only '.', '-', spaces between letters and '/' between words"
            }
            TelegramError::IoError(_) => "Check that stdin and stdout are available",
            TelegramError::ConfigError { .. } | TelegramError::ConfigValidationError { .. } => {
                "Check the TOML syntax and section names of the config file"
            }
            TelegramError::InvalidConfigValueError { .. } => {
                "Fix the listed value or remove it to use the default"
            }
            TelegramError::MissingEnvVarError { .. } => {
                "Export the variable before starting telegram"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TelegramError>;
