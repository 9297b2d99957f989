//! Error types for the navigator crate

use thiserror::Error;

/// Result type alias for navigator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating configuration
///
/// The per-tick path never fails; every branch there has a fallback.
#[derive(Debug, Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A configuration value is out of range or inconsistent
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
