//! Reading the request line off a connection.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::server::error::Error;

/// The first line received on a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Everything read up to and including the `\n`, decoded lossily.
    pub text: String,
    /// The peer closed the stream before a `\n` arrived. `text` then holds
    /// whatever partial data was received and must not be parsed.
    pub reached_eof: bool,
}

/// Read bytes up to and including the first `\n`.
///
/// At most `max_len` bytes are consumed. Hitting that limit before the
/// delimiter fails with [`Error::LineTooLong`]; running out of input is not an
/// error and is reported through [`RawLine::reached_eof`].
pub async fn read_line<R>(reader: &mut R, max_len: usize) -> Result<RawLine, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let limit = u64::try_from(max_len).unwrap_or(u64::MAX);
    let n = reader.take(limit).read_until(b'\n', &mut buf).await?;

    let terminated = buf.last() == Some(&b'\n');
    if !terminated && n == max_len {
        return Err(Error::LineTooLong(max_len));
    }

    Ok(RawLine {
        text: String::from_utf8_lossy(&buf).into_owned(),
        reached_eof: !terminated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    async fn read(input: &[u8], max_len: usize) -> Result<RawLine, Error> {
        let mut reader = BufReader::new(input);
        read_line(&mut reader, max_len).await
    }

    #[tokio::test]
    async fn test_reads_first_line_only() {
        let line = read(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n", 1024).await.unwrap();
        assert_eq!(line.text, "GET / HTTP/1.1\r\n");
        assert!(!line.reached_eof);
    }

    #[tokio::test]
    async fn test_bare_line_feed() {
        let line = read(b"GET /nope HTTP/1.1\n", 1024).await.unwrap();
        assert_eq!(line.text, "GET /nope HTTP/1.1\n");
        assert!(!line.reached_eof);
    }

    #[tokio::test]
    async fn test_partial_line_at_eof() {
        let line = read(b"GET / HTT", 1024).await.unwrap();
        assert_eq!(line.text, "GET / HTT");
        assert!(line.reached_eof);
    }

    #[tokio::test]
    async fn test_empty_stream() {
        let line = read(b"", 1024).await.unwrap();
        assert_eq!(line.text, "");
        assert!(line.reached_eof);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let line = read(b"GET /\xff HTTP/1.1\n", 1024).await.unwrap();
        assert_eq!(line.text, "GET /\u{fffd} HTTP/1.1\n");
    }

    #[tokio::test]
    async fn test_line_too_long() {
        let result = read(b"GET /aaaaaaaaaaaaaaaa HTTP/1.1\n", 8).await;
        assert!(matches!(result, Err(Error::LineTooLong(8))));
    }

    #[tokio::test]
    async fn test_line_exactly_at_limit() {
        let line = read(b"A B C\n", 6).await.unwrap();
        assert_eq!(line.text, "A B C\n");
        assert!(!line.reached_eof);
    }
}
