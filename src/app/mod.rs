//! Application calling convention.
//!
//! Handlers follow the WSGI call-and-callback shape: they receive the
//! request [`Environ`] and a responder whose `start_response` registers
//! status and headers exactly once, then either emit body chunks through the
//! responder's `write` or return them as a [`Body`].
//!
//! The calling convention is a closed choice made at registration time, not
//! discovered by inspecting the handler at runtime:
//!
//! - [`SyncHandler`] runs to completion without suspending; its `write` is
//!   non-suspending (chunks are queued and drained to the wire, in order,
//!   before the returned body).
//! - [`AsyncHandler`] may await; its `write` is suspension-aware and streams
//!   straight to the socket. The request body has already been buffered into
//!   the environment, so body reads never suspend mid-handler.
//!
//! Both modes produce identical wire output for the same status, headers and
//! chunks.

pub mod invoke;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;

use crate::http::environ::Environ;
use crate::http::error::ProtocolError;
use crate::http::response::ResponseState;
use crate::http::writer::ResponseWriter;

/// Body returned by a handler, normalized into byte chunks.
///
/// `Content-Length` is computed only for a body known to be exactly one
/// eagerly available chunk: a `Single`, or a `Chunks` of length one. A
/// `Stream` is a lazy, single-pass sequence and is always streamed without a
/// length, whatever it turns out to yield.
pub enum Body {
    Empty,
    Single(Bytes),
    Chunks(Vec<Bytes>),
    Stream(Box<dyn Iterator<Item = Bytes> + Send>),
}

/// Synchronous application handler.
pub trait SyncHandler: Send + Sync {
    fn call(&self, env: &mut Environ, resp: &mut SyncResponder<'_>) -> anyhow::Result<Body>;
}

/// Asynchronous application handler.
///
/// The returned future borrows the environment and responder for the length
/// of the call; implementations typically wrap an `async move` block in
/// `Box::pin`.
pub trait AsyncHandler: Send + Sync {
    fn call<'a, 'b, 'w>(
        &'a self,
        env: &'a mut Environ,
        resp: &'a mut AsyncResponder<'b, 'w>,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Body>> + Send + 'a>>
    where
        'b: 'a,
        'w: 'a;
}

/// Calling convention for one registered application, resolved once at
/// registration rather than per request.
#[derive(Clone)]
pub enum Handler {
    Sync(Arc<dyn SyncHandler>),
    Async(Arc<dyn AsyncHandler>),
}

impl Handler {
    pub fn sync(handler: impl SyncHandler + 'static) -> Self {
        Handler::Sync(Arc::new(handler))
    }

    pub fn asynchronous(handler: impl AsyncHandler + 'static) -> Self {
        Handler::Async(Arc::new(handler))
    }
}

/// Responder handed to synchronous handlers.
///
/// `write` cannot suspend, so chunks are queued here and drained to the wire
/// by the invoker as soon as the handler returns, ahead of the returned
/// body. Queued chunks count as "written via the write callback": their
/// presence disables the single-chunk `Content-Length` computation exactly
/// as a streamed write would.
pub struct SyncResponder<'a> {
    state: &'a mut ResponseState,
    queued: Vec<Bytes>,
}

impl<'a> SyncResponder<'a> {
    pub(crate) fn new(state: &'a mut ResponseState) -> Self {
        Self {
            state,
            queued: Vec::new(),
        }
    }

    /// Registers status and headers; callable at most once per request.
    pub fn start_response(
        &mut self,
        status: impl Into<String>,
        headers: Vec<(String, String)>,
    ) -> Result<(), ProtocolError> {
        self.state.start(status, headers)
    }

    /// Queues one body chunk for the wire.
    pub fn write(&mut self, chunk: impl Into<Bytes>) {
        self.queued.push(chunk.into());
    }

    pub(crate) fn into_queued(self) -> Vec<Bytes> {
        self.queued
    }
}

/// Responder handed to asynchronous handlers.
///
/// `write` flushes the header block on the first chunk and streams every
/// chunk straight to the connection's writer.
pub struct AsyncResponder<'a, 'w> {
    state: &'a mut ResponseState,
    writer: &'a mut ResponseWriter<'w>,
}

impl<'a, 'w> AsyncResponder<'a, 'w> {
    pub(crate) fn new(state: &'a mut ResponseState, writer: &'a mut ResponseWriter<'w>) -> Self {
        Self { state, writer }
    }

    /// Registers status and headers; callable at most once per request, and
    /// only before the first `write`.
    pub fn start_response(
        &mut self,
        status: impl Into<String>,
        headers: Vec<(String, String)>,
    ) -> Result<(), ProtocolError> {
        self.state.start(status, headers)
    }

    /// Streams one body chunk, sending the header block first if it has not
    /// gone out yet.
    pub async fn write(&mut self, chunk: impl Into<Bytes>) -> std::io::Result<()> {
        let chunk = chunk.into();
        self.writer.write(self.state, &chunk).await
    }
}
