//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;
use crate::server::resources::Resource;

/// Errors that can occur during HTTP server operation.
///
/// Every variant is local to a single connection except for failures
/// returned by [`HttpServer::start`](crate::HttpServer::start) while binding.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing the request line.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The peer closed the connection before sending a full line.
    #[error("Connection closed before a full request line, received {0:?}")]
    IncompleteRequest(String),

    /// The request line exceeded the configured maximum length.
    #[error("Request line longer than {0} bytes")]
    LineTooLong(usize),

    /// A read or write deadline expired.
    #[error("Timed out while {0}")]
    Timeout(&'static str),

    /// A response body could not be loaded.
    #[error("Resource {resource} unavailable: {source}")]
    ResourceUnavailable {
        resource: Resource,
        #[source]
        source: std::io::Error,
    },

    /// The template context did not serialize to a flat object.
    #[error("Template context must serialize to an object of scalar values")]
    TemplateContext,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
