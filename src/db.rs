use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        // 5 open connections, none kept idle, recycled after an hour.
        let db = MySqlPoolOptions::new()
            .max_connections(5)
            .min_connections(0)
            .max_lifetime(Duration::from_secs(3600))
            .connect(&config.database_url())
            .await
            .context("failed to connect to database")?;

        tracing::info!(
            host = %config.database.host,
            database = %config.database.name,
            "database connection established"
        );

        Ok(Self { db, config })
    }

    pub async fn synchronize_schema(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db)
            .await
            .context("failed to synchronize database schema")?;
        tracing::info!("database synchronized");
        Ok(())
    }

    /// Lazily-connected state for tests that never reach the store.
    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::config::DatabaseConfig;

        let config = Arc::new(AppConfig {
            database: DatabaseConfig {
                host: "localhost".into(),
                port: 3306,
                user: "test".into(),
                password: "test".into(),
                name: "test".into(),
            },
            port: 3001,
        });

        let db = MySqlPoolOptions::new()
            .connect_lazy(&config.database_url())
            .expect("lazy pool ok");

        Self { db, config }
    }
}
