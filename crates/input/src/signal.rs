//! OS signal integration.
//!
//! Bridges SIGINT/SIGTERM into the [`ShutdownToken`] using a small tokio
//! runtime that lives as long as the watcher.

use anyhow::Result;
use tokio::runtime::{Builder, Runtime};
use tracing::{info, warn};

use crate::ShutdownToken;

/// Running signal listener.
pub struct SignalWatcher {
    _rt: Runtime,
}

impl SignalWatcher {
    pub fn start(shutdown: ShutdownToken) -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("wordle-signals")
            .enable_all()
            .build()?;

        rt.spawn(async move {
            wait_for_signal().await;
            info!("termination signal received");
            shutdown.cancel();
        });

        Ok(Self { _rt: rt })
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "cannot listen for SIGTERM");
            return ctrl_c().await;
        }
    };

    tokio::select! {
        _ = ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    ctrl_c().await
}

/// Resolves on SIGINT; never resolves if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for SIGINT");
        std::future::pending::<()>().await;
    }
}
