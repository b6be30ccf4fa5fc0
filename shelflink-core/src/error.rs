//! Error types for Shelflink Core

use thiserror::Error;

/// Result type alias using ParseError
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that occur when parsing adapter-facing text into core types.
///
/// Conversions between records never fail; parsing only happens at the
/// boundaries where records arrive as text (CLI arguments, JS strings).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown digital format: {0}")]
    UnknownFormat(String),
}
