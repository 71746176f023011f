//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::net::TcpListener;
use tokio::sync::watch;
use uuid::Uuid;

use scaffold_server::config::ServerConfig;
use scaffold_server::http::{HttpServer, SessionEvents};
use scaffold_server::lifecycle::Shutdown;
use scaffold_server::routing::{NoExtraRoutes, RouteRegistrar};

pub const INDEX_BYTES: &[u8] = b"<!DOCTYPE html><html><body>scaffold index</body></html>";
pub const PUBLIC_FILE_BYTES: &[u8] = b"body { color: #333; }";
pub const ASSET_FILE_BYTES: &[u8] = b"console.log('asset');";

/// On-disk site fixture with an index document and both static
/// directories, removed on drop.
pub struct TestSite {
    pub root: PathBuf,
}

impl TestSite {
    pub fn create() -> Self {
        let root = std::env::temp_dir().join(format!("scaffold-test-{}", Uuid::new_v4()));
        fs::create_dir_all(root.join("views")).unwrap();
        fs::create_dir_all(root.join("public")).unwrap();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("views/index.html"), INDEX_BYTES).unwrap();
        fs::write(root.join("public/style.css"), PUBLIC_FILE_BYTES).unwrap();
        fs::write(root.join("assets/app.js"), ASSET_FILE_BYTES).unwrap();
        Self { root }
    }

    pub fn config(&self) -> ServerConfig {
        let mut config = ServerConfig::default();
        config.content.public_dir = self.root.join("public");
        config.content.assets_dir = self.root.join("assets");
        config.content.index_file = self.root.join("views/index.html");
        config
    }
}

impl Drop for TestSite {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// A server running on an ephemeral loopback port.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub sessions: SessionEvents,
    pub ready: watch::Receiver<bool>,
    pub shutdown: Shutdown,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

pub async fn start(config: ServerConfig) -> RunningServer {
    start_with(config, &NoExtraRoutes).await
}

pub async fn start_with(config: ServerConfig, registrar: &dyn RouteRegistrar) -> RunningServer {
    let server = HttpServer::new(config, registrar);
    let sessions = server.sessions();
    let mut ready = server.subscribe_ready();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    while !*ready.borrow() {
        ready.changed().await.unwrap();
    }

    RunningServer {
        addr,
        sessions,
        ready,
        shutdown,
    }
}
