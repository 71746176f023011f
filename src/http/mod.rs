//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware order, routes)
//!     → middleware/ (security headers on every response)
//!     → static mounts / index / delegated routes / 404 fallback
//!     → websocket.rs (upgrade path, lifecycle logging only)
//! ```

pub mod middleware;
pub mod server;
pub mod websocket;

pub use server::{AppState, HttpServer};
pub use websocket::{SessionEvent, SessionEvents};
