//! Request-line parser module.
//!
//! Only the first line of a request is ever interpreted; header lines and
//! bodies sent by the client are ignored.

mod request;
mod error;
mod tests;

// Re-export public items
pub use request::{RequestLine, parse_request_line};
pub use error::Error;
