use crate::http::error::ProtocolError;

/// Per-request response record: status plus ordered headers.
///
/// Created empty for each request and populated exactly once by the
/// handler's `start_response` call. Header insertion order is significant
/// for wire output and duplicates are allowed, so the headers live in a
/// plain vector rather than a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseState {
    /// Status line tail, e.g. `200 OK`.
    pub status: String,
    /// Name/value pairs in registration order.
    pub headers: Vec<(String, String)>,
    started: bool,
}

impl ResponseState {
    pub fn new() -> Self {
        Self {
            status: String::new(),
            headers: Vec::new(),
            started: false,
        }
    }

    /// Registers status and headers.
    ///
    /// Fails with [`ProtocolError::DoubleResponseStart`] if called a second
    /// time during the same request.
    pub fn start(
        &mut self,
        status: impl Into<String>,
        headers: Vec<(String, String)>,
    ) -> Result<(), ProtocolError> {
        if self.started {
            return Err(ProtocolError::DoubleResponseStart);
        }

        self.status = status.into();
        self.headers = headers;
        self.started = true;
        Ok(())
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Appends a `Content-Length` header after the handler-supplied ones.
    pub(crate) fn append_content_length(&mut self, length: usize) {
        self.headers
            .push(("Content-Length".to_string(), length.to_string()));
    }

    /// Minimal pre-populated state for gateway-generated error responses.
    pub(crate) fn error(status: &str) -> Self {
        Self {
            status: status.to_string(),
            headers: vec![("Content-Length".to_string(), "0".to_string())],
            started: true,
        }
    }
}

impl Default for ResponseState {
    fn default() -> Self {
        Self::new()
    }
}
