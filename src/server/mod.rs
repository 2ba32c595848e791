//! HTTP server implementation for transactions-server.
//!
//! One request line per connection, one response, then the connection is
//! closed. Connections are served concurrently, each in its own task.

mod response;
mod config;
mod connection;
mod error;
mod handler;
mod http_server;
mod line_reader;
mod resources;
mod router;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::{AccountSummary, ServerConfig};
pub use connection::{Connection, ConnectionState, ServiceContext};
pub use error::Error;
pub use handler::Endpoint;
pub use http_server::HttpServer;
pub use line_reader::{RawLine, read_line};
pub use resources::{FsResources, Resource, ResourceFuture, ResourceProvider, render_template};
pub use router::{Route, Router};
