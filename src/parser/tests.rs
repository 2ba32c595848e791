//! Tests for the request-line parser.

#[cfg(test)]
mod tests {
    use crate::parser::{Error, RequestLine, parse_request_line};

    #[test]
    fn test_parse_simple_get_request_line() {
        let result = parse_request_line("GET /index.html HTTP/1.1\r\n").unwrap();
        assert_eq!(result.method, "GET");
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.version, "HTTP/1.1");
    }

    #[test]
    fn test_parse_bare_line_feed_terminator() {
        let result = parse_request_line("GET / HTTP/1.1\n").unwrap();
        assert_eq!(result.path, "/");
        assert_eq!(result.version, "HTTP/1.1");
    }

    #[test]
    fn test_parse_without_terminator() {
        let result = parse_request_line("GET /transactions.csv HTTP/1.0").unwrap();
        assert_eq!(result.path, "/transactions.csv");
        assert_eq!(result.version, "HTTP/1.0");
    }

    #[test]
    fn test_any_method_token_is_accepted() {
        for method in ["GET", "POST", "DELETE", "BREW", "get", "X"] {
            let line = format!("{method} /transactions.json HTTP/1.1\r\n");
            let result = parse_request_line(&line).unwrap();
            assert_eq!(result.method, method);
            assert_eq!(result.path, "/transactions.json");
        }
    }

    #[test]
    fn test_middle_token_is_always_the_path() {
        let lines = [
            ("A B C", "B"),
            ("GET /search?q=1&page=2 HTTP/1.1", "/search?q=1&page=2"),
            ("GET %2Fencoded HTTP/1.1", "%2Fencoded"),
            ("GET /../etc/passwd HTTP/1.1", "/../etc/passwd"),
            ("GET \t HTTP/1.1", "\t"),
        ];

        for (line, path) in lines {
            let result = parse_request_line(line).unwrap();
            assert_eq!(result.path, path, "line {line:?}");
        }
    }

    #[test]
    fn test_single_token_is_rejected() {
        let result = parse_request_line("BADLINE\n");
        assert_eq!(result, Err(Error::MalformedRequestLine("BADLINE\n".to_string())));
    }

    #[test]
    fn test_wrong_token_counts_are_rejected() {
        let lines = [
            "",
            "\r\n",
            "GET\r\n",
            "GET /\r\n",
            "GET / HTTP/1.1 extra\r\n",
            "GET / HTTP/1.1 \r\n",
            " GET / HTTP/1.1\r\n",
        ];

        for line in lines {
            let result = parse_request_line(line);
            assert!(
                matches!(result, Err(Error::MalformedRequestLine(ref l)) if l == line),
                "line {line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_consecutive_spaces_count_as_empty_tokens() {
        // Splitting is on single spaces, so a doubled space adds a token
        let result = parse_request_line("GET  /index.html HTTP/1.1\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));

        // ...and two spaces with nothing between them yield an empty path
        let result = parse_request_line("GET  HTTP/1.1\r\n").unwrap();
        assert_eq!(result.path, "");
    }

    #[test]
    fn test_only_one_terminator_is_stripped() {
        let result = parse_request_line("GET / HTTP/1.1\r\r\n").unwrap();
        assert_eq!(result.version, "HTTP/1.1\r");
    }

    #[test]
    fn test_error_message_carries_the_line() {
        let err = parse_request_line("NOPE\r\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid request line \"NOPE\\r\\n\"");
    }

    #[test]
    fn test_from_str_and_display() {
        let line: RequestLine = "HEAD /transactions.xml HTTP/1.1\r\n".parse().unwrap();
        assert_eq!(line, RequestLine::new("HEAD", "/transactions.xml", "HTTP/1.1"));
        assert_eq!(line.to_string(), "HEAD /transactions.xml HTTP/1.1");
    }
}
