use wicket::http::error::ProtocolError;
use wicket::http::parser::{parse_header_line, parse_request_line};

#[test]
fn test_parse_simple_request_line() {
    let line = parse_request_line(b"GET /test HTTP/1.1").unwrap();

    assert_eq!(line.method, "GET");
    assert_eq!(line.path, "/test");
    assert_eq!(line.query, None);
    assert_eq!(line.protocol, "HTTP/1.1");
}

#[test]
fn test_parse_request_line_with_query() {
    let line = parse_request_line(b"GET /search?q=rust HTTP/1.1").unwrap();

    assert_eq!(line.path, "/search");
    assert_eq!(line.query.as_deref(), Some("q=rust"));
}

#[test]
fn test_parse_request_line_splits_on_first_question_mark_only() {
    let line = parse_request_line(b"GET /a?b=1?c=2 HTTP/1.1").unwrap();

    assert_eq!(line.path, "/a");
    assert_eq!(line.query.as_deref(), Some("b=1?c=2"));
}

#[test]
fn test_parse_request_line_trailing_question_mark_keeps_query_present() {
    let line = parse_request_line(b"GET /a? HTTP/1.1").unwrap();

    assert_eq!(line.path, "/a");
    assert_eq!(line.query.as_deref(), Some(""));
}

#[test]
fn test_parse_request_line_too_few_tokens() {
    let result = parse_request_line(b"GET /test");

    assert!(matches!(
        result,
        Err(ProtocolError::MalformedRequestLine { tokens: 2 })
    ));
}

#[test]
fn test_parse_request_line_too_many_tokens() {
    let result = parse_request_line(b"GET /test HTTP/1.1 extra");

    assert!(matches!(
        result,
        Err(ProtocolError::MalformedRequestLine { tokens: 4 })
    ));
}

#[test]
fn test_parse_request_line_double_space_is_an_extra_token() {
    // Splitting is on single spaces, so a doubled space fails the count.
    let result = parse_request_line(b"GET  / HTTP/1.1");

    assert!(matches!(
        result,
        Err(ProtocolError::MalformedRequestLine { tokens: 4 })
    ));
}

#[test]
fn test_parse_request_line_idempotent() {
    let a = parse_request_line(b"POST /x?y=z HTTP/1.1").unwrap();
    let b = parse_request_line(b"POST /x?y=z HTTP/1.1").unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_parse_header_line_strips_value_whitespace() {
    let (name, value) = parse_header_line(b"Content-Type:   text/plain  ").unwrap();

    assert_eq!(name, "Content-Type");
    assert_eq!(value, "text/plain");
}

#[test]
fn test_parse_header_line_splits_on_first_colon() {
    let (name, value) = parse_header_line(b"Host: localhost:8080").unwrap();

    assert_eq!(name, "Host");
    assert_eq!(value, "localhost:8080");
}

#[test]
fn test_parse_header_line_preserves_name_as_sent() {
    let (name, _) = parse_header_line(b"x-custom-thing: 1").unwrap();

    assert_eq!(name, "x-custom-thing");
}

#[test]
fn test_parse_header_line_without_colon() {
    let result = parse_header_line(b"NoColonHere");

    assert!(matches!(result, Err(ProtocolError::MalformedHeaderLine(_))));
}
