//! Minimal HTTP server scaffold.
//!
//! Security-header middleware, static file serving under `/public` and
//! `/assets`, a fixed index document, a delegated route-registration
//! seam, a terminal 404, and a WebSocket endpoint that only logs
//! connection lifecycle.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
