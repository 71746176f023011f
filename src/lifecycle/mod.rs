//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → build router → bind listener → readiness signal
//!     → (test mode) harness.rs waits for readiness, then runs guarded
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → stop accepting → drain → exit
//! ```

pub mod harness;
pub mod shutdown;

pub use shutdown::Shutdown;
