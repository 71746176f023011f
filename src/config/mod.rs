//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file named by SCAFFOLD_CONFIG (loader.rs)
//!     → environment overlay: PORT, NODE_ENV (loader.rs)
//!     → ServerConfig (immutable)
//!     → shared via Arc to the handlers that need it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no ambient global instance
//! - All fields have defaults so the server starts with nothing set
//! - Environment access is injected for testability

pub mod loader;
pub mod schema;

pub use loader::{load, ConfigError};
pub use schema::{ContentConfig, HarnessConfig, ListenerConfig, ServerConfig};
