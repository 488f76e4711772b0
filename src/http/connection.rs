use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::app::{Handler, invoke::invoke};
use crate::http::environ::Environ;
use crate::http::error::ProtocolError;
use crate::http::lines::LineReader;
use crate::http::parser::{parse_header_line, parse_request_line};
use crate::http::response::ResponseState;
use crate::http::writer::ResponseWriter;

/// Serves exactly one request/response cycle over the given byte streams.
///
/// This is the core entry point: the listener (or a test) supplies the
/// reader, the writer and the injected handler; the call returns when the
/// cycle completes or fails. The writer is flushed on every exit path.
pub async fn serve<R, W>(reader: R, writer: W, handler: Handler) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    Connection::new(reader, writer, handler).run().await
}

/// One accepted connection: exclusive owner of its reader/writer pair and of
/// the single in-flight request. No reuse across requests, no pipelining.
pub struct Connection<R, W> {
    reader: BufReader<R>,
    writer: W,
    handler: Handler,
}

impl<R, W> Connection<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W, handler: Handler) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            handler,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.serve_request().await;

        // Whatever happened above, leave nothing sitting in the write
        // buffer when the connection goes down.
        if let Err(err) = self.writer.flush().await {
            debug!("flush on teardown failed: {}", err);
        }

        result
    }

    async fn serve_request(&mut self) -> anyhow::Result<()> {
        let mut env = match self.read_request().await {
            Ok(env) => env,
            Err(err) => {
                let mut writer = ResponseWriter::new(&mut self.writer);
                if let Err(io_err) = writer.send_error("400 Bad Request").await {
                    debug!("error response failed: {}", io_err);
                }
                return Err(err.into());
            }
        };

        debug!(
            "{} {} {}",
            env.request_method, env.path_info, env.server_protocol
        );

        let mut state = ResponseState::new();
        let mut writer = ResponseWriter::new(&mut self.writer);

        if let Err(err) = invoke(&self.handler, &mut env, &mut state, &mut writer).await {
            // Recoverable only while the header block is still unsent; after
            // that the wire already carries a partial response and the
            // connection just closes.
            if let Err(io_err) = writer.send_error("500 Internal Server Error").await {
                debug!("error response failed: {}", io_err);
            }
            return Err(err);
        }

        Ok(())
    }

    /// Reads the header block and body, producing the request environment.
    async fn read_request(&mut self) -> Result<Environ, ProtocolError> {
        let mut lines = LineReader::new(&mut self.reader);

        let first = lines
            .next_line()
            .await?
            .ok_or(ProtocolError::MalformedRequestLine { tokens: 0 })?;
        let request_line = parse_request_line(&first)?;
        let mut env = Environ::from_request_line(request_line);

        while let Some(line) = lines.next_line().await? {
            let (name, value) = parse_header_line(&line)?;
            env.absorb_header(&name, &value)?;
        }

        // Buffer the declared body up front so handlers of either calling
        // convention read it without touching the socket.
        if let Some(length) = env.content_length_bytes()? {
            let mut body = vec![0u8; length];
            self.reader.read_exact(&mut body).await.map_err(|err| {
                if err.kind() == std::io::ErrorKind::UnexpectedEof {
                    ProtocolError::TruncatedRequest
                } else {
                    ProtocolError::Io(err)
                }
            })?;
            env.set_input(Bytes::from(body));
        }

        Ok(env)
    }
}
