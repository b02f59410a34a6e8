//! Database Module
//!
//! Storage bootstrap and the employee repositories

pub mod bootstrap;
pub mod repository;

pub use bootstrap::{BootstrapReport, open_database};
pub use repository::{EmployeeStore, MemoryStore, RepoError, RepoResult, SqliteStore};

use std::sync::Arc;

use crate::core::{Config, StorageBackend};

/// Build the store selected by `config.storage_backend`
///
/// The memory backend never touches the filesystem and reports no bootstrap.
pub async fn open_store(
    config: &Config,
) -> RepoResult<(Arc<dyn EmployeeStore>, Option<BootstrapReport>)> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory employee store");
            Ok((Arc::new(MemoryStore::new()), None))
        }
        StorageBackend::Sqlite => {
            let (pool, report) =
                open_database(&config.database_url, config.db_max_connections).await?;
            Ok((Arc::new(SqliteStore::new(pool)), Some(report)))
        }
    }
}
