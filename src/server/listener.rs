use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::app::Handler;
use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the configured address and serves connections until the task is
/// cancelled. Each accepted socket gets its own task and its own single
/// request/response cycle with the injected handler.
pub async fn run(cfg: &Config, handler: Handler) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        debug!("Accepted connection from {}", peer);

        let handler = handler.clone();
        tokio::spawn(async move {
            let (reader, writer) = socket.into_split();
            let conn = Connection::new(reader, writer, handler);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
