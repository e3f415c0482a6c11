//! Error types for sharemetrics-core
//!
//! Misuse of the default-registry slot surfaces as one of two fixed errors;
//! everything else here belongs to config loading.

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// A default registry name was already installed
    #[error("Default metric registry name is already set.")]
    DefaultAlreadySet,

    /// The default registry was requested before one was installed
    #[error("Default registry name has not been set.")]
    DefaultNotSet,

    /// Invalid configuration
    #[error("invalid configuration: {field}")]
    InvalidConfig {
        /// Config field name
        field: String,
        /// Detailed message
        message: String,
    },

    /// Config file could not be parsed
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for user-friendly error messages
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get a suggestion for how to fix the error
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for Error {
    fn user_message(&self) -> String {
        match self {
            Error::DefaultAlreadySet => {
                "📊 A default metric registry is already configured.".to_string()
            }
            Error::DefaultNotSet => "📊 No default metric registry is configured.".to_string(),
            Error::InvalidConfig { field, message } => {
                format!("⚙️ Configuration error in '{}': {}", field, message)
            }
            Error::ConfigParse(e) => format!("⚙️ Could not parse metrics config: {}", e),
            Error::Io(e) => format!("❌ Could not read metrics config: {}", e),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Error::DefaultAlreadySet => Some(
                "💡 Install the default registry once at startup, or call `reset_all` first."
                    .to_string(),
            ),
            Error::DefaultNotSet => Some(
                "💡 Call `set_default` (or set SHAREMETRICS_DEFAULT_REGISTRY) before `get_default`."
                    .to_string(),
            ),
            Error::InvalidConfig { field, .. } => {
                Some(format!("💡 Check the '{}' setting in the [metrics] table.", field))
            }
            _ => None,
        }
    }
}
