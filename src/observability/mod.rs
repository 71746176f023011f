//! Observability subsystem.
//!
//! Structured logging only: every subsystem emits `tracing` events with
//! fields (session ids, bind address, errors); logging.rs wires the
//! subscriber once at startup.

pub mod logging;
