//! Error types for the gridline engine.
//!
//! This module defines the centralized error type [`GridError`] and a type alias
//! [`Result`] for convenient error handling. Only the ambient surfaces of the
//! crate are fallible (configuration loading and layout persistence); the row
//! pipeline itself never returns errors, it corrects or ignores bad input.

use thiserror::Error;

/// The main error type for gridline operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use gridline::GridError;
///
/// fn validate_page_size(size: &str) -> Result<usize, GridError> {
///     size.parse()
///         .map_err(|_| GridError::Config(format!("invalid page_size: {size}")))
/// }
///
/// assert!(validate_page_size("abc").is_err());
/// ```
#[derive(Debug, Error)]
pub enum GridError {
    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML configuration could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON (de)serialization failed.
    ///
    /// Raised by the layout store when reading or writing snapshots.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Layout storage operation failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// A specialized `Result` type for gridline operations.
pub type Result<T> = std::result::Result<T, GridError>;
