//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// The account figures substituted into the index template.
///
/// Every field becomes a `{field}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub username: String,
    pub balance: String,
}

impl Default for AccountSummary {
    fn default() -> Self {
        Self {
            username: "Michael".to_string(),
            balance: "1 000.50".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size.
    pub read_buffer_size: usize,
    /// The longest request line accepted, terminator included.
    pub max_line_length: usize,
    /// Deadline for receiving the request line. `None` waits forever.
    pub read_timeout: Option<Duration>,
    /// Deadline for writing the response. `None` waits forever.
    pub write_timeout: Option<Duration>,
    /// Directory holding `template/` and `shared/`.
    pub web_root: PathBuf,
    /// Values rendered into the index page.
    pub account: AccountSummary,
    /// Emit the JSON and XML content types as bare header lines, without the
    /// `Content-Type:` key, exactly as the first deployment did.
    pub legacy_headers: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 9999)),
            max_connections: 1024,
            read_buffer_size: 8192,
            max_line_length: 8192,
            read_timeout: Some(Duration::from_secs(30)),
            write_timeout: Some(Duration::from_secs(30)),
            web_root: PathBuf::from("web"),
            account: AccountSummary::default(),
            legacy_headers: false,
        }
    }
}
