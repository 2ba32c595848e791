//! HTTP response types and the response writer.

use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

const CRLF: &[u8] = b"\r\n";

/// HTTP status codes produced by the built-in endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    NotFound = 404,
}

impl StatusCode {
    /// The numeric code; the status line on the wire carries nothing else.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.as_u16()
    }
}

/// Represents an HTTP response.
///
/// Header lines are stored preformatted and emitted in insertion order. They
/// are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: u16,
    /// The header lines, without terminators
    pub headers: Vec<String>,
    /// The response body, if any
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code, no headers and no body.
    pub fn new(status: impl Into<u16>) -> Self {
        Self {
            status: status.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a `name: value` header line.
    pub fn with_header(self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let line = format!("{}: {}", name.as_ref(), value.as_ref());
        self.with_header_line(line)
    }

    /// Append a raw header line, emitted exactly as given.
    pub fn with_header_line(mut self, line: impl Into<String>) -> Self {
        self.headers.push(line.into());
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl AsRef<str>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Append a `Content-Length` line for the body set so far (0 without a body).
    ///
    /// Set the body first; the length is taken from it at the time of the call.
    pub fn with_content_length(self) -> Self {
        let length = self.body.as_ref().map_or(0, Vec::len);
        self.with_header("Content-Length", length.to_string())
    }

    /// Set the response body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize the status line and header block, including the blank line
    /// that ends it.
    pub fn head_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(format!("HTTP/1.1 {}", self.status).as_bytes());
        bytes.extend_from_slice(CRLF);

        for line in &self.headers {
            bytes.extend_from_slice(line.as_bytes());
            bytes.extend_from_slice(CRLF);
        }

        // Empty line that separates headers from body
        bytes.extend_from_slice(CRLF);

        bytes
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.head_bytes();
        if let Some(body) = &self.body {
            bytes.extend_from_slice(body);
        }
        bytes
    }

    /// Write the response to `writer` and flush it.
    ///
    /// The writer is left open; closing the connection is up to the caller.
    pub async fn write_to<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut out = BufWriter::new(writer);

        out.write_all(&self.head_bytes()).await?;
        if let Some(body) = &self.body {
            out.write_all(body).await?;
        }

        out.flush().await
    }
}
