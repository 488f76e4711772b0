use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::error::ProtocolError;

/// Lazy sequence of CRLF-delimited lines read from a buffered stream.
///
/// Each call to [`next_line`](LineReader::next_line) performs one read from
/// the underlying stream up to and including the next CRLF and yields the
/// line content with the delimiter stripped. The sequence terminates at the
/// first zero-length line, the blank line separating headers from body;
/// whatever follows it stays in the underlying reader.
pub struct LineReader<R> {
    inner: R,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the next header line.
    ///
    /// Returns `Ok(None)` once the empty line ending the header block is
    /// seen. A bare LF is not a line terminator; reading continues until a
    /// full CRLF arrives. Fails with [`ProtocolError::TruncatedRequest`] if
    /// the stream ends first.
    pub async fn next_line(&mut self) -> Result<Option<Vec<u8>>, ProtocolError> {
        let mut line = Vec::new();

        loop {
            let n = self.inner.read_until(b'\n', &mut line).await?;

            if n == 0 {
                return Err(ProtocolError::TruncatedRequest);
            }

            if line.ends_with(b"\r\n") {
                line.truncate(line.len() - 2);

                if line.is_empty() {
                    return Ok(None);
                }

                return Ok(Some(line));
            }

            // Lone LF inside a line; keep reading until CRLF.
        }
    }
}
