use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    migrate::Migrator,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    MySqlPool,
};

/// Schema for every table the dashboard reads or writes.
pub static MIGRATOR: Migrator = sqlx::migrate!();

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Connects to MySQL, retrying while the server is still starting up.
pub async fn connect_with_retry(
    database_url: &str,
    max_connections: u32,
    max_retries: u32,
) -> Result<MySqlPool, sqlx::Error> {
    let connect_options = MySqlConnectOptions::from_str(database_url)?;
    let mut retries = 0;

    loop {
        match MySqlPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(connect_options.clone())
            .await
        {
            Ok(pool) => {
                tracing::info!(attempts = retries + 1, "database pool ready");
                return Ok(pool);
            }
            Err(e) if retries < max_retries => {
                retries += 1;
                tracing::warn!(attempt = retries, error = %e, "MySQL not ready yet");
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => {
                tracing::error!(retries = max_retries, error = %e, "giving up on MySQL");
                return Err(e);
            }
        }
    }
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
