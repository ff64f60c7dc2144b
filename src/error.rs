//! Error types for verso operations.

use thiserror::Error;

/// Errors that can occur while loading navigation input or parsing locators.
///
/// The layout and diffing engines themselves are total functions and never
/// fail; errors only arise at the JSON-facing and I/O surfaces.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid locator: {0}")]
    InvalidLocator(String),
}

pub type Result<T> = std::result::Result<T, Error>;
