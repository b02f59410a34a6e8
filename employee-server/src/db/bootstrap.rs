//! Storage bootstrap
//!
//! 启动时确保数据库文件和 `employees` 表存在。重复执行是安全的。

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use super::{RepoError, RepoResult};

const CREATE_EMPLOYEES_TABLE: &str = r#"
CREATE TABLE employees (
    id INTEGER PRIMARY KEY,
    firstName TEXT NOT NULL DEFAULT '',
    lastName TEXT NOT NULL DEFAULT '',
    emailId TEXT NOT NULL DEFAULT ''
)
"#;

/// What the bootstrap had to create
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub database_created: bool,
    pub table_created: bool,
}

/// File path behind a SQLite URL, `None` for in-memory databases
pub fn database_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Open a pool on `url`, creating the database and table when missing
pub async fn open_database(
    url: &str,
    max_connections: u32,
) -> RepoResult<(SqlitePool, BootstrapReport)> {
    let path = database_path(url);
    let database_created = match &path {
        Some(path) => !path.exists(),
        None => false,
    };

    let parent = path
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        std::fs::create_dir_all(parent).map_err(|e| {
            RepoError::Database(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }

    let mut options = SqliteConnectOptions::from_str(url)
        .map_err(|e| RepoError::Database(format!("Invalid database url: {e}")))?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));
    if path.is_some() {
        options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    let pool = pool_options(path.is_some(), max_connections)
        .connect_with(options)
        .await
        .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;

    if database_created {
        tracing::info!(url = %url, "Database created");
    }

    let table_created = ensure_table(&pool).await?;

    Ok((
        pool,
        BootstrapReport {
            database_created,
            table_created,
        },
    ))
}

/// Pool settings for file-backed or in-memory databases
///
/// 内存数据库只存在于打开它的连接中：固定单连接，且不回收
fn pool_options(file_backed: bool, max_connections: u32) -> SqlitePoolOptions {
    if file_backed {
        return SqlitePoolOptions::new().max_connections(max_connections.max(1));
    }
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
}

/// Create the `employees` table if absent. Returns whether it was created.
pub async fn ensure_table(pool: &SqlitePool) -> RepoResult<bool> {
    let exists: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'employees'")
            .fetch_optional(pool)
            .await?;
    if exists.is_some() {
        tracing::debug!("Table employees already exists");
        return Ok(false);
    }

    sqlx::query(CREATE_EMPLOYEES_TABLE).execute(pool).await?;
    tracing::info!("Table employees created");
    Ok(true)
}
