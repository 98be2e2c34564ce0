use std::future::Future;
use std::time::Duration;
use tokio::signal;
use tokio::sync::watch;

/// Resolves on Ctrl+C or SIGTERM. A handler that fails to install is logged
/// and never fires; the other signal still works.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Splits `signal` into the future handed to `with_graceful_shutdown` and a
/// deadline that resolves `drain_timeout` after the signal fired.
///
/// The deadline only starts counting once the graceful future has been
/// polled to completion; if that future is dropped first it never resolves.
pub fn with_drain_deadline<S>(
    signal: S,
    drain_timeout: Duration,
) -> (
    impl Future<Output = ()> + Send + 'static,
    impl Future<Output = ()> + Send + 'static,
)
where
    S: Future<Output = ()> + Send + 'static,
{
    let (fired_tx, mut fired_rx) = watch::channel(false);

    let graceful = async move {
        signal.await;
        tracing::info!(
            timeout_secs = drain_timeout.as_secs(),
            "allowing in-flight requests to finish"
        );
        let _ = fired_tx.send(true);
    };

    let deadline = async move {
        if fired_rx.wait_for(|fired| *fired).await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(drain_timeout).await;
    };

    (graceful, deadline)
}
