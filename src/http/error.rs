use std::fmt;
use std::io;

/// Protocol-level failures, all local to a single connection.
///
/// None of these are retried and none are fatal to the process; a failure
/// terminates only the offending connection's task.
#[derive(Debug)]
pub enum ProtocolError {
    /// Request line did not split into exactly three space-separated tokens.
    MalformedRequestLine { tokens: usize },
    /// Header line had no `:` separator, or carried an unusable value.
    MalformedHeaderLine(String),
    /// Stream ended before a required delimiter or byte count was available.
    TruncatedRequest,
    /// The handler invoked `start_response` more than once for one request.
    DoubleResponseStart,
    /// Underlying socket read or write failed.
    Io(io::Error),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MalformedRequestLine { tokens } => {
                write!(f, "malformed request line: expected 3 tokens, got {tokens}")
            }
            ProtocolError::MalformedHeaderLine(line) => {
                write!(f, "malformed header line: {line:?}")
            }
            ProtocolError::TruncatedRequest => {
                write!(f, "stream ended before the request was complete")
            }
            ProtocolError::DoubleResponseStart => {
                write!(f, "start_response called more than once for this request")
            }
            ProtocolError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ProtocolError {
    fn from(err: io::Error) -> Self {
        ProtocolError::Io(err)
    }
}
