use deadpool_postgres::{Config, ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use tracing::info;

use crate::error::RealtimeError;

/// Connection settings for the portal database, constructed once by the
/// caller and passed down. Nothing in this crate reads the environment.
#[derive(Debug, Clone)]
pub struct RealtimeConfig {
    pub database_url: String,
}

impl RealtimeConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Build a connection pool and verify it can hand out a client.
    pub async fn connect_pool(&self) -> Result<Pool, RealtimeError> {
        let mut cfg = Config::new();
        cfg.url = Some(self.database_url.clone());
        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| RealtimeError::Connection(format!("pool creation failed: {e}")))?;

        let _client = pool
            .get()
            .await
            .map_err(|e| RealtimeError::Connection(format!("connection test failed: {e}")))?;
        info!("database pool ready");

        Ok(pool)
    }
}
