use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::ResponseState;

/// Wire-side half of the response: serializes status, headers and body
/// chunks onto the connection's writer.
///
/// Two states, pending and sent, tracked by `headers_sent`. The transition
/// happens exactly once, on the first body chunk or at end-of-response if no
/// chunk was ever written, and emits the status line, the header block in
/// registration order, and the terminating blank line before flushing.
pub struct ResponseWriter<'w> {
    wire: &'w mut (dyn AsyncWrite + Send + Unpin),
    headers_sent: bool,
}

impl<'w> ResponseWriter<'w> {
    pub fn new(wire: &'w mut (dyn AsyncWrite + Send + Unpin)) -> Self {
        Self {
            wire,
            headers_sent: false,
        }
    }

    pub fn headers_sent(&self) -> bool {
        self.headers_sent
    }

    /// Writes one body chunk, flushing the header block first if this is the
    /// first chunk of the response.
    pub async fn write(&mut self, state: &ResponseState, chunk: &[u8]) -> io::Result<()> {
        if !self.headers_sent {
            self.send_headers(state).await?;
        }

        self.wire.write_all(chunk).await?;
        self.wire.flush().await
    }

    /// Ends the response, emitting the header block if no chunk ever forced
    /// it out. Headers reach the wire unconditionally, body or not.
    pub async fn finish(&mut self, state: &ResponseState) -> io::Result<()> {
        if !self.headers_sent {
            self.send_headers(state).await?;
        }

        self.wire.flush().await
    }

    /// Sends a minimal gateway-generated error response.
    ///
    /// Once headers have begun flushing the response on the wire cannot be
    /// repaired, so this becomes a no-op; the caller still tears the
    /// connection down.
    pub async fn send_error(&mut self, status: &str) -> io::Result<()> {
        if self.headers_sent {
            return Ok(());
        }

        let state = ResponseState::error(status);
        self.finish(&state).await
    }

    async fn send_headers(&mut self, state: &ResponseState) -> io::Result<()> {
        let mut head = Vec::with_capacity(256);

        head.extend_from_slice(b"HTTP/1.1 ");
        head.extend_from_slice(state.status.as_bytes());
        head.extend_from_slice(b"\r\n");

        for (name, value) in &state.headers {
            head.extend_from_slice(name.as_bytes());
            head.extend_from_slice(b": ");
            head.extend_from_slice(value.as_bytes());
            head.extend_from_slice(b"\r\n");
        }

        head.extend_from_slice(b"\r\n");

        self.wire.write_all(&head).await?;
        self.wire.flush().await?;
        self.headers_sent = true;
        Ok(())
    }
}
