use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid operation: {operation}")]
    InvalidOperation { operation: String },

    #[error("Nothing to work on: {what} is empty")]
    EmptyInput { what: String },

    #[error("Power overflow while computing {what}")]
    PowerOverflow { what: String },

    #[error("Insufficient power for this spell (required {required}, got {actual})")]
    InsufficientPower { required: u32, actual: u32 },

    #[error("Spell casting failed after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    #[error("Memory not found: {key}")]
    MemoryNotFound { key: String },
}

/// 錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Casting,
    System,
}

impl SpellError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpellError::IoError(_) | SpellError::SerializationError(_) => ErrorCategory::System,
            SpellError::TomlError(_)
            | SpellError::ConfigError { .. }
            | SpellError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Casting,
        }
    }

    /// 給終端使用者看的簡短訊息，保留練習原本的提示字串
    pub fn user_friendly_message(&self) -> String {
        match self {
            SpellError::InvalidOperation { .. } => "Invalid operation".to_string(),
            SpellError::InsufficientPower { .. } => "Insufficient power for this spell".to_string(),
            SpellError::MemoryNotFound { .. } => "Memory not found".to_string(),
            SpellError::RetriesExhausted { attempts } => {
                format!("Spell casting failed after {} attempts", attempts)
            }
            SpellError::TomlError(_) => "The grimoire file is not valid TOML".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SpellError::IoError(_) => "Check that the grimoire file exists and is readable",
            SpellError::TomlError(_) => "Fix the TOML syntax in the grimoire file",
            SpellError::ConfigError { .. } | SpellError::InvalidConfigValueError { .. } => {
                "Adjust the offending value in the grimoire file or drop it to use the default"
            }
            SpellError::InvalidOperation { .. } => "Use one of: add, multiply, max, min",
            SpellError::EmptyInput { .. } => "Provide at least one value",
            SpellError::PowerOverflow { .. } => "Use smaller inputs",
            SpellError::InsufficientPower { .. } => "Channel more power into the spell",
            SpellError::RetriesExhausted { .. } => "Increase retry.max_attempts",
            SpellError::MemoryNotFound { .. } => "Store the key before recalling it",
            SpellError::SerializationError(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, SpellError>;
