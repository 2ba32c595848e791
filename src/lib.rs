//! A single-request-per-connection HTTP/1.1 server for account transaction exports.
//!
//! The server reads exactly one request line from each accepted connection,
//! resolves its path against a fixed set of endpoints, writes a manually
//! framed response and closes the connection.
//!
//! # Features
//!
//! - Request-line parsing with exact three-token semantics
//! - Exact-match routing with a 404 fallback
//! - Byte-exact response framing with ordered header lines
//! - Pluggable resource provider and `{placeholder}` template rendering
//! - One task per connection, bounded concurrency, graceful shutdown
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use transactions_server::{parse_request_line, ParserError};
//!
//! let line = parse_request_line("GET /transactions.csv HTTP/1.1\r\n").unwrap();
//! assert_eq!(line.path, "/transactions.csv");
//!
//! match parse_request_line("BADLINE\n") {
//!     Err(ParserError::MalformedRequestLine(raw)) => assert_eq!(raw, "BADLINE\n"),
//!     Ok(_) => unreachable!(),
//! }
//! ```
//!
//! ## Building a response
//!
//! ```
//! use transactions_server::{HttpResponse, StatusCode};
//!
//! let response = HttpResponse::new(StatusCode::Ok)
//!     .with_body("a,b\n1,2\n")
//!     .with_content_type("text/csv")
//!     .with_content_length()
//!     .with_header("Connection", "close");
//!
//! assert_eq!(
//!     response.to_bytes(),
//!     b"HTTP/1.1 200\r\nContent-Type: text/csv\r\nContent-Length: 8\r\nConnection: close\r\n\r\na,b\n1,2\n".to_vec()
//! );
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use transactions_server::{HttpServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), transactions_server::ServerError> {
//!     HttpServer::new(ServerConfig::default()).start().await
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, RequestLine, parse_request_line};
pub use server::{
    AccountSummary, Endpoint, Error as ServerError, HttpResponse, HttpServer, Router, ServerConfig, StatusCode,
};
