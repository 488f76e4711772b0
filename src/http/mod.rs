//! HTTP/1.1 protocol pipeline.
//!
//! One request/response cycle per connection, no keep-alive, no pipelining.
//! The pipeline runs leaf-first:
//!
//! ```text
//! byte stream → LineReader → parser → Environ
//!                                        │
//!                                 application handler
//!                                        │
//! byte stream ← ResponseWriter ← body chunks
//! ```
//!
//! - **`lines`**: lazy CRLF-delimited line sequence, terminated by the blank
//!   line ending the header block
//! - **`parser`**: pure request-line and header-line parsing
//! - **`environ`**: the normalized request environment handed to handlers
//! - **`response`**: per-request status/header record with the
//!   `start_response` once-only guard
//! - **`writer`**: pending/sent header state machine and body streaming
//! - **`connection`**: orchestrates one connection's lifecycle end to end
//!
//! # Example
//!
//! ```ignore
//! use wicket::app::Handler;
//! use wicket::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let handler = Handler::sync(MyApp);
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let handler = handler.clone();
//!         tokio::spawn(async move {
//!             let (reader, writer) = socket.into_split();
//!             let conn = Connection::new(reader, writer, handler);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod environ;
pub mod error;
pub mod lines;
pub mod parser;
pub mod response;
pub mod writer;
