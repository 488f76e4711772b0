use bytes::Bytes;

use crate::app::{AsyncResponder, Body, Handler, SyncResponder};
use crate::http::environ::Environ;
use crate::http::response::ResponseState;
use crate::http::writer::ResponseWriter;

/// Runs one handler invocation and drives its output through the writer.
///
/// Dispatches on the registered calling convention, normalizes the returned
/// body, applies the single-chunk `Content-Length` policy, streams the
/// chunks, and ends the response (headers reach the wire even for an empty
/// body).
pub async fn invoke(
    handler: &Handler,
    env: &mut Environ,
    state: &mut ResponseState,
    writer: &mut ResponseWriter<'_>,
) -> anyhow::Result<()> {
    let body = match handler {
        Handler::Sync(app) => {
            let mut resp = SyncResponder::new(state);
            let body = app.call(env, &mut resp)?;

            // Drain callback writes ahead of the returned body.
            for chunk in resp.into_queued() {
                writer.write(state, &chunk).await?;
            }

            body
        }
        Handler::Async(app) => {
            let mut resp = AsyncResponder::new(state, writer);
            app.call(env, &mut resp).await?
        }
    };

    // A body of exactly one eagerly available chunk is the only shape whose
    // length is knowable up front; everything else streams without one.
    let single: Option<Bytes> = match body {
        Body::Empty => None,
        Body::Single(chunk) => Some(chunk),
        Body::Chunks(chunks) if chunks.len() == 1 => chunks.into_iter().next(),
        Body::Chunks(chunks) => {
            for chunk in chunks {
                writer.write(state, &chunk).await?;
            }
            None
        }
        Body::Stream(chunks) => {
            for chunk in chunks {
                writer.write(state, &chunk).await?;
            }
            None
        }
    };

    if let Some(chunk) = single {
        if !writer.headers_sent() {
            state.append_content_length(chunk.len());
        }
        writer.write(state, &chunk).await?;
    }

    writer.finish(state).await?;
    Ok(())
}
