//! Employee Repository (SQLite)

use super::{EmployeeStore, RepoError, RepoResult};
use async_trait::async_trait;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, firstName, lastName, emailId FROM employees ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, firstName, lastName, emailId FROM employees WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Insert with `MAX(id) + 1` computed inside the same statement
pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (id, firstName, lastName, emailId)
        SELECT COALESCE(MAX(id), 0) + 1, ?1, ?2, ?3 FROM employees
        RETURNING id, firstName, lastName, emailId
        "#,
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email_id)
    .fetch_one(pool)
    .await?;
    Ok(employee)
}

/// `NULLIF(?, '')` turns a blank field into NULL so `COALESCE` keeps the stored value
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    sqlx::query_as::<_, Employee>(
        r#"
        UPDATE employees SET
            firstName = COALESCE(NULLIF(?1, ''), firstName),
            lastName = COALESCE(NULLIF(?2, ''), lastName),
            emailId = COALESCE(NULLIF(?3, ''), emailId)
        WHERE id = ?4
        RETURNING id, firstName, lastName, emailId
        "#,
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email_id)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(RepoError::NotFound(id))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(id));
    }
    Ok(())
}

/// SQLite-backed [`EmployeeStore`]
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> RepoResult<Vec<Employee>> {
        find_all(&self.pool).await
    }

    async fn get(&self, id: i64) -> RepoResult<Employee> {
        find_by_id(&self.pool, id)
            .await?
            .ok_or(RepoError::NotFound(id))
    }

    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        create(&self.pool, data).await
    }

    async fn update(&self, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
        update(&self.pool, id, data).await
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        delete(&self.pool, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::bootstrap;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory SQLite pool with the employees table in place
    async fn test_store() -> SqliteStore {
        let (pool, _) = bootstrap::open_database("sqlite::memory:", 1).await.unwrap();
        SqliteStore::new(pool)
    }

    fn payload(first: &str, last: &str, email: &str) -> EmployeeCreate {
        EmployeeCreate {
            first_name: first.into(),
            last_name: last.into(),
            email_id: email.into(),
        }
    }

    #[tokio::test]
    async fn test_list_empty() {
        let store = test_store().await;
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = test_store().await;
        let first = store
            .create(payload("Jean", "Dupont", "jean.dupont@example.com"))
            .await
            .unwrap();
        let second = store
            .create(payload("Marie", "Martin", "marie.martin@example.com"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, first.id + 1);
        assert_eq!(first.first_name, "Jean");
        assert_eq!(first.email_id, "jean.dupont@example.com");

        let all = store.list().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_after_deleting_max_reuses_next_id() {
        let store = test_store().await;
        store.create(payload("A", "A", "a@x")).await.unwrap();
        store.create(payload("B", "B", "b@x")).await.unwrap();
        store.create(payload("C", "C", "c@x")).await.unwrap();

        store.delete(3).await.unwrap();
        let next = store.create(payload("D", "D", "d@x")).await.unwrap();
        assert_eq!(next.id, 3);

        store.delete(1).await.unwrap();
        let next = store.create(payload("E", "E", "e@x")).await.unwrap();
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_get_returns_stored_record() {
        let store = test_store().await;
        let created = store.create(payload("Jean", "Dupont", "j@x")).await.unwrap();
        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let store = test_store().await;
        store.create(payload("Jean", "Dupont", "j@x")).await.unwrap();
        assert!(matches!(
            store.get(999).await,
            Err(RepoError::NotFound(999))
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_blank_fields() {
        let store = test_store().await;
        let created = store.create(payload("Jean", "Dupont", "j@x")).await.unwrap();

        let updated = store
            .update(
                created.id,
                EmployeeUpdate {
                    first_name: String::new(),
                    last_name: "Martin".into(),
                    email_id: String::new(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Jean");
        assert_eq!(updated.last_name, "Martin");
        assert_eq!(updated.email_id, "j@x");
        assert_eq!(store.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_overwrites_non_empty_fields() {
        let store = test_store().await;
        let created = store.create(payload("Jean", "Dupont", "j@x")).await.unwrap();

        let updated = store
            .update(
                created.id,
                EmployeeUpdate {
                    first_name: "X".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "X");
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let store = test_store().await;
        let result = store.update(42, EmployeeUpdate::default()).await;
        assert!(matches!(result, Err(RepoError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = test_store().await;
        let created = store.create(payload("Jean", "Dupont", "j@x")).await.unwrap();

        store.delete(created.id).await.unwrap();
        assert!(matches!(
            store.get(created.id).await,
            Err(RepoError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(created.id).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_table_is_database_error() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = SqliteStore::new(pool);
        assert!(matches!(store.list().await, Err(RepoError::Database(_))));
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = test_store().await;
        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(payload(&format!("E{i}"), "Test", "t@x"))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("employees.db").display());
        let (pool, _) = bootstrap::open_database(&url, 5).await.unwrap();
        let store = SqliteStore::new(pool.clone());

        let mut handles = Vec::new();
        for i in 0..100 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(payload(&format!("E{i}"), "Test", "t@x")).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=100).collect::<Vec<i64>>());
        assert_eq!(store.list().await.unwrap().len(), 100);
        pool.close().await;
    }
}
