use crate::http::error::ProtocolError;

/// The three tokens of an HTTP request line, with the URI already split on
/// the first `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
    /// Present whenever the URI contained a `?`, even if nothing followed it.
    pub query: Option<String>,
    pub protocol: String,
}

/// Parses a request line into exactly three space-separated tokens.
///
/// The split is on single spaces, so consecutive spaces produce extra empty
/// tokens and fail the count check. The URI is split on the first `?` only;
/// any further `?` stays in the query string verbatim.
pub fn parse_request_line(line: &[u8]) -> Result<RequestLine, ProtocolError> {
    let line = std::str::from_utf8(line)
        .map_err(|_| ProtocolError::MalformedRequestLine { tokens: 0 })?;

    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != 3 {
        return Err(ProtocolError::MalformedRequestLine {
            tokens: tokens.len(),
        });
    }

    let (method, uri, protocol) = (tokens[0], tokens[1], tokens[2]);

    let (path, query) = match uri.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (uri, None),
    };

    Ok(RequestLine {
        method: method.to_string(),
        path: path.to_string(),
        query,
        protocol: protocol.to_string(),
    })
}

/// Splits a header line on the first `:` into name and value.
///
/// The value's surrounding whitespace is stripped; the name is left exactly
/// as it appeared on the wire.
pub fn parse_header_line(line: &[u8]) -> Result<(String, String), ProtocolError> {
    let line = std::str::from_utf8(line)
        .map_err(|_| ProtocolError::MalformedHeaderLine(String::from_utf8_lossy(line).into_owned()))?;

    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| ProtocolError::MalformedHeaderLine(line.to_string()))?;

    Ok((name.to_string(), value.trim().to_string()))
}
