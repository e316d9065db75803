//! Shared application state.

use std::sync::Arc;

use webuser_core::storage::{Result, UserRepository};

use crate::{config::Config, storage::SqliteRepository};

/// `SQLITE_PATH` value selecting a throwaway in-memory database.
const IN_MEMORY_PATH: &str = ":memory:";

/// Shared application state.
///
/// Cloned for each request handler. Holds the user repository as a trait
/// object so handlers never see the concrete backend.
#[derive(Clone)]
pub struct AppState {
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Open the SQLite store named by `config` and build the state around it.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let repo = if config.sqlite_path == IN_MEMORY_PATH {
            SqliteRepository::new_in_memory().await?
        } else {
            SqliteRepository::new(&config.sqlite_path).await?
        };
        Ok(Self::new(Arc::new(repo)))
    }

    /// State backed by a fresh in-memory SQLite database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let config = Config {
            sqlite_path: IN_MEMORY_PATH.to_string(),
            request_timeout_seconds: 10,
        };
        Self::from_config(&config)
            .await
            .expect("in-memory SQLite should open")
    }
}
