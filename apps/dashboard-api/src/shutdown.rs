use std::time::Duration;

use sqlx::MySqlPool;
use tokio::signal;

pub async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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

    tracing::info!(
        timeout_secs = timeout.as_secs(),
        "allowing connections to drain"
    );
}

/// Closes the pool once the server has stopped accepting requests.
pub async fn release_pool(pool: MySqlPool, timeout: Duration) {
    match tokio::time::timeout(timeout, pool.close()).await {
        Ok(()) => tracing::info!("database pool closed"),
        Err(_) => tracing::warn!(
            timeout_secs = timeout.as_secs(),
            "database pool did not close in time"
        ),
    }
}
