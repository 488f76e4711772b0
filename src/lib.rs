//! Wicket - WSGI-style HTTP/1.1 gateway
//!
//! Core library bridging raw socket byte streams to sync or async
//! application handlers.

pub mod app;
pub mod config;
pub mod http;
pub mod server;
