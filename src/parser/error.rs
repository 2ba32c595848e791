//! Error types for the request-line parser.

use thiserror::Error;

/// Errors that can occur while parsing a request line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The request line did not split into exactly three tokens.
    ///
    /// Carries the offending line as it was received, terminator included.
    #[error("invalid request line {0:?}")]
    MalformedRequestLine(String),
}
