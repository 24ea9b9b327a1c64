use ps_relay::RegistryHandle;

use std::future::Future;

use log::{error, info};

/// Resolves on Ctrl+C, or SIGTERM on unix
pub async fn signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C)"),
            Err(e) => {
                error!("Failed to listen for SIGINT: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

/// Graceful shutdown future for `axum::serve`.
///
/// Waits for `trigger`, then stops the registry so every subscriber
/// connection is closed before the HTTP side drains. The registry itself
/// keeps running until the process exits.
pub async fn graceful_shutdown<F>(registry: RegistryHandle, trigger: F)
where
    F: Future<Output = ()>,
{
    trigger.await;
    info!("Initiating graceful shutdown, stopping broadcast registry");

    match registry.stop().await {
        Ok(closed) => info!("Closed {closed} subscriber connections"),
        Err(e) => error!("Failed to stop broadcast registry: {e}"),
    }
}
