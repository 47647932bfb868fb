use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::candidate::application::ports::outgoing::StorageError;
use crate::config::AppConfig;

/// Opens the connection pool. A failure here is a `StorageErrorKind::Connection`
/// and translates to `PersistenceError::ConnectionFailure`.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection, StorageError> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    info!("Connected to database");

    Ok(conn)
}
