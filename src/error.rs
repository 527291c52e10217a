//! Error types shared across the library

use thiserror::Error;

use crate::config::ConfigError;

/// Result alias used throughout titlewave
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while mounting, animating or emitting a heading
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The page has no element matching the heading selector
    #[error("no element matches '{selector}'")]
    HeadingNotFound { selector: String },
    /// The heading was removed from the page after mounting
    #[error("heading is no longer attached to the page")]
    Detached,
    /// Generated CSS failed to parse or print
    #[error("stylesheet error: {0}")]
    Stylesheet(String),
    /// The host environment rejected an operation
    #[error("host error: {0}")]
    Host(String),
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl<T: std::fmt::Display> From<lightningcss::error::Error<T>> for Error {
    fn from(e: lightningcss::error::Error<T>) -> Self {
        Error::Stylesheet(e.to_string())
    }
}
