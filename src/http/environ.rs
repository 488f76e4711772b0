use bytes::Bytes;

use crate::http::error::ProtocolError;
use crate::http::parser::RequestLine;

/// Fully buffered, re-readable view over a request body.
///
/// Filled by the connection with exactly `Content-Length` bytes before the
/// handler runs, so handlers never read the socket themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    data: Bytes,
}

impl Input {
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Normalized request environment handed to application handlers.
///
/// Built once per request and immutable afterwards except for the body
/// `Input`, which the connection fills before invocation. Data absent from
/// the request is `None`, never an empty value; handlers must test for
/// presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environ {
    pub request_method: String,
    /// Always empty; this gateway mounts applications at the root.
    pub script_name: String,
    pub path_info: String,
    pub server_protocol: String,
    /// Present whenever the request URI contained a `?`.
    pub query_string: Option<String>,
    /// Derived from a `Host` header, when one was sent.
    pub server_name: Option<String>,
    /// Port half of the `Host` header, defaulting to 80 when absent.
    pub server_port: Option<u16>,
    /// `Content-Length` header value, copied verbatim.
    pub content_length: Option<String>,
    /// `Content-Type` header value, copied verbatim.
    pub content_type: Option<String>,
    input: Input,
}

impl Environ {
    pub fn from_request_line(line: RequestLine) -> Self {
        Self {
            request_method: line.method,
            script_name: String::new(),
            path_info: line.path,
            server_protocol: line.protocol,
            query_string: line.query,
            server_name: None,
            server_port: None,
            content_length: None,
            content_type: None,
            input: Input::default(),
        }
    }

    /// Folds one parsed header into the environment.
    ///
    /// `Host` (case-sensitive canonical form) is split into host and port and
    /// lands in `server_name`/`server_port` rather than under a header key.
    /// Every other name is checked against the allow-list; names outside it
    /// are dropped.
    pub fn absorb_header(&mut self, name: &str, value: &str) -> Result<(), ProtocolError> {
        if name == "Host" {
            let (host, port) = match value.split_once(':') {
                Some((host, port)) => {
                    let port = port.parse::<u16>().map_err(|_| {
                        ProtocolError::MalformedHeaderLine(format!("Host: {value}"))
                    })?;
                    (host, port)
                }
                None => (value, 80),
            };

            self.server_name = Some(host.to_string());
            self.server_port = Some(port);
            return Ok(());
        }

        // Allow-list: only these two headers survive into the environment.
        let key = name.to_uppercase().replace('-', "_");
        match key.as_str() {
            "CONTENT_LENGTH" => self.content_length = Some(value.to_string()),
            "CONTENT_TYPE" => self.content_type = Some(value.to_string()),
            _ => {}
        }

        Ok(())
    }

    /// Declared body length in bytes, if a `Content-Length` header was sent.
    pub fn content_length_bytes(&self) -> Result<Option<usize>, ProtocolError> {
        match &self.content_length {
            Some(raw) => {
                let n = raw.parse::<usize>().map_err(|_| {
                    ProtocolError::MalformedHeaderLine(format!("Content-Length: {raw}"))
                })?;
                Ok(Some(n))
            }
            None => Ok(None),
        }
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub(crate) fn set_input(&mut self, data: Bytes) {
        self.input = Input { data };
    }
}
