use std::sync::atomic::{AtomicBool, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

static FAULTED: AtomicBool = AtomicBool::new(false);

/// Logs any panic, then asks the server to drain and stop.
pub fn install_panic_hook(token: CancellationToken) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        error!(target: "startup", "Unhandled fault: {}", panic_info);
        FAULTED.store(true, Ordering::SeqCst);
        token.cancel();
        default_hook(panic_info);
    }));
}

pub fn fault_detected() -> bool {
    FAULTED.load(Ordering::SeqCst)
}

/// Resolves on SIGINT, SIGTERM or cancellation of `token`.
pub async fn signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(target: "startup", "Received ctrl-c, shutting down"),
        _ = terminate => info!(target: "startup", "Received SIGTERM, shutting down"),
        _ = token.cancelled() => warn!(target: "startup", "Shutting down after an unhandled fault"),
    }
}
