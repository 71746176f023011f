//! Connection endpoint.
//!
//! # Responsibilities
//! - Complete the upgrade handshake at `/ws`
//! - Assign each session an opaque identifier
//! - Log connect and disconnect, exactly once each, in order
//!
//! # Design Decisions
//! - No message protocol: inbound frames are drained and ignored
//! - Lifecycle is also published on a broadcast channel so tests can
//!   observe it without scraping logs

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::http::server::AppState;

/// Lifecycle event for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Connected(Uuid),
    Disconnected(Uuid),
}

/// Broadcast fan-out for session lifecycle events.
#[derive(Clone)]
pub struct SessionEvents {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Subscribe to lifecycle events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine; the log lines are the primary output.
        let _ = self.tx.send(event);
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler for `GET /ws`.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| observe_session(socket, state.sessions))
}

async fn observe_session(mut socket: WebSocket, sessions: SessionEvents) {
    let session_id = Uuid::new_v4();
    tracing::info!(session_id = %session_id, "A user connected");
    sessions.publish(SessionEvent::Connected(session_id));

    while let Some(frame) = socket.recv().await {
        match frame {
            Ok(Message::Close(_)) | Err(_) => break,
            // Frames carry no meaning here.
            Ok(_) => {}
        }
    }

    tracing::info!(session_id = %session_id, "User disconnected");
    sessions.publish(SessionEvent::Disconnected(session_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_subscribers_in_order() {
        let events = SessionEvents::new();
        let mut rx = events.subscribe();
        let id = Uuid::new_v4();

        events.publish(SessionEvent::Connected(id));
        events.publish(SessionEvent::Disconnected(id));

        assert_eq!(rx.recv().await.unwrap(), SessionEvent::Connected(id));
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::Disconnected(id));
    }

    #[tokio::test]
    async fn publish_without_subscribers_does_not_panic() {
        let events = SessionEvents::new();
        events.publish(SessionEvent::Connected(Uuid::new_v4()));
    }
}
