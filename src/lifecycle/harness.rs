//! Guarded test-runner invocation.
//!
//! When the deployment environment asks for it, the entry point schedules
//! one runner invocation: wait for the server's readiness signal, hold for
//! the configured delay, then run. The runner executes in its own task so
//! an `Err` or a panic is logged and contained; the listening socket is
//! never affected.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Error type a runner may return.
pub type RunnerError = Box<dyn std::error::Error + Send + Sync>;

/// Schedule one guarded runner invocation.
///
/// Fires at most once per process: after `ready` flips to `true` and the
/// delay elapses. If the readiness channel closes first (server never
/// started), the runner is skipped.
pub fn spawn_runner<F>(
    mut ready: watch::Receiver<bool>,
    delay: Duration,
    runner: F,
) -> JoinHandle<()>
where
    F: Future<Output = Result<(), RunnerError>> + Send + 'static,
{
    tokio::spawn(async move {
        while !*ready.borrow() {
            if ready.changed().await.is_err() {
                return;
            }
        }
        tokio::time::sleep(delay).await;

        tracing::info!("Running tests...");
        match tokio::spawn(runner).await {
            Ok(Ok(())) => tracing::info!("Test runner finished"),
            Ok(Err(error)) => tracing::error!(%error, "Tests are not valid"),
            Err(error) => tracing::error!(%error, "Test runner panicked"),
        }
    })
}

/// Default runner: a loopback request for `/` that checks the status
/// line.
pub async fn smoke_check(addr: SocketAddr) -> Result<(), RunnerError> {
    let mut stream = TcpStream::connect(addr).await?;
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await?;

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await?;

    let head = String::from_utf8_lossy(&raw);
    let status_line = head.lines().next().unwrap_or("");
    if status_line.starts_with("HTTP/1.1 200") {
        Ok(())
    } else {
        Err(format!("unexpected status line: {status_line:?}").into())
    }
}
