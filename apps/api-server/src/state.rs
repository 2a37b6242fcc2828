//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{PostRepository, UserRepository};
use blog_infra::database::{DatabaseConnections, InMemoryStore};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use blog_infra::database::{PostgresPostRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// State backed by the in-memory store.
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            users: Arc::new(store.users()),
            posts: Arc::new(store.posts()),
            db: None,
        }
    }

    /// Build the application state with appropriate implementations.
    #[cfg(feature = "postgres")]
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        use migration::{Migrator, MigratorTrait};

        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        let connections = match DatabaseConnections::init(db_config).await {
            Ok(connections) => Arc::new(connections),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                return Ok(Self::in_memory());
            }
        };

        if config.run_migrations {
            tracing::info!("Applying pending migrations");
            Migrator::up(&connections.main, None).await?;
        }

        tracing::info!("Application state initialized (postgres)");

        Ok(Self {
            users: Arc::new(PostgresUserRepository::new(connections.main.clone())),
            posts: Arc::new(PostgresPostRepository::new(connections.main.clone())),
            db: Some(connections),
        })
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Ok(Self::in_memory())
    }
}
