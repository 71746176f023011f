//! Delegated route registration.
//!
//! Route definitions owned by an external collaborator are added through
//! the [`RouteRegistrar`] capability. The core invokes it exactly once
//! while the router is built, before the 404 fallback is installed, and
//! never inspects what it adds.

use axum::Router;

use crate::http::server::AppState;

/// Capability interface for a collaborator that owns extra routes.
pub trait RouteRegistrar {
    /// Add routes to the router. Called once during startup.
    fn register(&self, router: Router<AppState>) -> Router<AppState>;
}

/// Registrar that adds nothing; used by the plain binary.
pub struct NoExtraRoutes;

impl RouteRegistrar for NoExtraRoutes {
    fn register(&self, router: Router<AppState>) -> Router<AppState> {
        router
    }
}
