//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware in a fixed, test-visible order
//! - Serve static content under `/public` and `/assets`
//! - Invoke the delegated route registrar before the 404 fallback
//! - Publish a readiness signal once the listener is serving

use std::sync::Arc;

use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, watch};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::middleware::security_headers;
use crate::http::websocket::{ws_handler, SessionEvents};
use crate::routing::RouteRegistrar;

/// Maximum accepted request body size in bytes.
const BODY_LIMIT: usize = 1024 * 1024;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sessions: SessionEvents,
}

/// HTTP server for the scaffold.
pub struct HttpServer {
    router: Router,
    sessions: SessionEvents,
    ready: watch::Sender<bool>,
}

impl HttpServer {
    /// Create a new HTTP server from the given configuration, giving the
    /// registrar one chance to add routes before the fallback.
    pub fn new(config: ServerConfig, registrar: &dyn RouteRegistrar) -> Self {
        let sessions = SessionEvents::new();
        let state = AppState {
            config: Arc::new(config),
            sessions: sessions.clone(),
        };

        let router = Self::build_router(state, registrar);
        let (ready, _) = watch::channel(false);

        Self {
            router,
            sessions,
            ready,
        }
    }

    /// Build the router.
    ///
    /// Middleware runs outermost-first: trace, security headers, body
    /// limit, CORS. Route order: index, delegated routes, static mounts,
    /// then the terminal 404 fallback. The fallback is terminal for any
    /// unmatched request, including wrong-method hits on known paths.
    fn build_router(state: AppState, registrar: &dyn RouteRegistrar) -> Router {
        let content = &state.config.content;

        // Static misses and non-GET hits fall through to the shared 404
        // body instead of ServeDir's own responses.
        let public = ServeDir::new(&content.public_dir)
            .call_fallback_on_method_not_allowed(true)
            .not_found_service(not_found.into_service());
        let assets = ServeDir::new(&content.assets_dir)
            .call_fallback_on_method_not_allowed(true)
            .not_found_service(not_found.into_service());

        let router = Router::new()
            .route("/", get(index))
            .route("/ws", get(ws_handler));

        registrar
            .register(router)
            .nest_service("/public", public)
            .nest_service("/assets", assets)
            .fallback(not_found)
            .method_not_allowed_fallback(not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn(security_headers))
                    .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
                    .layer(
                        CorsLayer::new()
                            .allow_origin(Any)
                            .allow_methods(Any)
                            .allow_headers(Any),
                    ),
            )
    }

    /// Subscribe to the readiness signal; flips to `true` once the
    /// listener is serving.
    pub fn subscribe_ready(&self) -> watch::Receiver<bool> {
        self.ready.subscribe()
    }

    /// Session lifecycle events from the connection endpoint.
    pub fn sessions(&self) -> SessionEvents {
        self.sessions.clone()
    }

    /// Run the server on the given listener until the shutdown signal
    /// fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Listening for connections");

        let Self { router, ready, .. } = self;
        let _ = ready.send(true);

        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Handler for `GET /`: the fixed index document.
///
/// A read failure is the one error path here and surfaces as 500.
async fn index(State(state): State<AppState>) -> Response {
    let path = &state.config.content.index_file;
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response()
        }
        Err(error) => {
            tracing::error!(path = %path.display(), %error, "Failed to read index document");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Terminal fallback for anything no earlier route matched.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
