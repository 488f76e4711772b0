use wicket::app::{Body, Handler, SyncHandler, SyncResponder};
use wicket::config::Config;
use wicket::http::environ::Environ;
use wicket::server;

/// Demo application: plain-text hello on every path.
struct HelloApp;

impl SyncHandler for HelloApp {
    fn call(&self, _env: &mut Environ, resp: &mut SyncResponder<'_>) -> anyhow::Result<Body> {
        resp.start_response(
            "200 OK",
            vec![("Content-Type".to_string(), "text/plain".to_string())],
        )?;

        Ok(Body::Single("hello, world!\n".into()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let handler = Handler::sync(HelloApp);

    tokio::select! {
        res = server::listener::run(&cfg, handler) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
