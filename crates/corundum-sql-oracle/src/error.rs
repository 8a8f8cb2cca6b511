//! Error types for grammar configuration.
//!
//! Compilation itself is total: every grammar operation is a pure
//! function over well-formed inputs and produces SQL text, never an
//! error. The only fallible surface is loading the configuration,
//! which happens once at process startup.

/// Errors that can occur while loading grammar configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration contents.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
