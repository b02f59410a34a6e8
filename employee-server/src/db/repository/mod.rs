//! Repository Module
//!
//! The [`EmployeeStore`] contract and its two backends:
//! - [`SqliteStore`] - `employees` table through sqlx
//! - [`MemoryStore`] - ordered list behind a lock

pub mod employee;
pub mod memory;

pub use employee::SqliteStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use shared::error::AppError;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Employee {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::employee_not_found(id),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence adapter shared by every backend
///
/// `create` assigns `max(id) + 1` (or `1` on an empty store) and must do so
/// atomically with the insert.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Backend name reported by `/health`
    fn backend(&self) -> &'static str;

    /// Cheap liveness check
    async fn ping(&self) -> RepoResult<()>;

    async fn list(&self) -> RepoResult<Vec<Employee>>;

    async fn get(&self, id: i64) -> RepoResult<Employee>;

    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee>;

    /// Blank fields in `data` keep the stored value
    async fn update(&self, id: i64, data: EmployeeUpdate) -> RepoResult<Employee>;

    async fn delete(&self, id: i64) -> RepoResult<()>;
}
