//! Application context - dependency injection container

use std::sync::Arc;

use linkfolio_core::{ImageStore, ProfileRepository, ProfileService};
use linkfolio_domain::{Config, Result};
use linkfolio_infra::{DbManager, HttpImageStore, SqliteProfileRepository};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub profiles: Arc<ProfileService>,
}

impl AppContext {
    /// Wire production adapters from `config`.
    ///
    /// Opens the SQLite pool, applies the schema and builds the image store
    /// client. Fails fast on any misconfiguration.
    pub fn new(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let repository: Arc<dyn ProfileRepository> =
            Arc::new(SqliteProfileRepository::new(Arc::clone(&db)));
        let images: Arc<dyn ImageStore> = Arc::new(HttpImageStore::from_config(&config.image_store)?);

        info!(
            db_path = %db.path().display(),
            image_folder = config.image_store.folder.as_deref().unwrap_or(""),
            "application context initialised"
        );

        Ok(Self::from_ports(config, repository, images))
    }

    /// Build a context around already constructed ports.
    pub fn from_ports(
        config: Config,
        repository: Arc<dyn ProfileRepository>,
        images: Arc<dyn ImageStore>,
    ) -> Self {
        Self { config, profiles: Arc::new(ProfileService::new(repository, images)) }
    }

    /// Verify the profile store is reachable.
    pub async fn health_check(&self) -> Result<()> {
        self.profiles.health_check().await
    }
}
