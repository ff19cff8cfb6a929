use crate::config::Config;
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynHashing,
    config::{ConnectionManager, Hashing, run_migrations},
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::Repositories,
    service::seed_order_statuses,
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &"<Registry>")
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = ConnectionManager::new_pool(
            &config.database_url,
            config.db_min_conn,
            config.db_max_conn,
        )
        .await
        .context("Failed to connect to the database")?;

        if config.run_migrations {
            info!("Running database migrations");
            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
        }

        let repositories = Repositories::new(pool);

        seed_order_statuses(&repositories.statuses)
            .await
            .context("Failed to seed order statuses")?;

        let hashing = Arc::new(Hashing::new()) as DynHashing;

        Ok(Self::from_repositories(repositories, hashing, config.expose_internal_errors).await)
    }

    /// Wires the services over already built repositories. The status rows
    /// must be seeded by the caller.
    pub async fn from_repositories(
        repositories: Repositories,
        hash: DynHashing,
        expose_internal_errors: bool,
    ) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));

        let deps = DependenciesInjectDeps {
            repositories,
            hash,
            registry: registry.clone(),
            expose_internal_errors,
        };

        let di_container = DependenciesInject::new(deps).await;

        Self {
            di_container,
            registry,
        }
    }
}
