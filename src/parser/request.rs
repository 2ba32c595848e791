//! Request-line parsing and representation.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// The first line of an HTTP request, split into its three tokens.
///
/// Tokens are kept verbatim: the method is not validated, the path is not
/// normalized or percent-decoded, and any query string stays part of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The method token (`GET`, `POST`, or anything else the client sent)
    pub method: String,
    /// The request target, matched verbatim by the router
    pub path: String,
    /// The protocol version token
    pub version: String,
}

impl RequestLine {
    /// Create a new request line from its tokens.
    pub fn new(method: impl Into<String>, path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            version: version.into(),
        }
    }
}

impl FromStr for RequestLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_request_line(s)
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.path, self.version)
    }
}

/// Remove a single trailing `\n` and, if present, the `\r` before it.
fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Parse a raw request line into method, path and version.
///
/// # Arguments
///
/// * `line` - The line as read from the connection, optionally still carrying
///   its `\r\n` or `\n` terminator
///
/// # Returns
///
/// The parsed request line, or [`Error::MalformedRequestLine`] unless the line
/// splits on single spaces into exactly three tokens
pub fn parse_request_line(line: &str) -> Result<RequestLine, Error> {
    let mut tokens = strip_terminator(line).split(' ');

    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(method), Some(path), Some(version), None) => Ok(RequestLine::new(method, path, version)),
        _ => Err(Error::MalformedRequestLine(line.to_string())),
    }
}
