//! Employee Repository (in-memory)

use super::{EmployeeStore, RepoError, RepoResult};
use async_trait::async_trait;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use tokio::sync::RwLock;

/// Process-local [`EmployeeStore`]
///
/// Records are kept in insertion order. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    employees: RwLock<Vec<Employee>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: RwLock::new(employees),
        }
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }

    async fn list(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.employees.read().await.clone())
    }

    async fn get(&self, id: i64) -> RepoResult<Employee> {
        self.employees
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        // id 分配和插入在同一把写锁内完成
        let mut employees = self.employees.write().await;
        let id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let employee = Employee::from_create(id, data);
        employees.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
        let mut employees = self.employees.write().await;
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RepoError::NotFound(id))?;
        employee.apply(data);
        Ok(employee.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut employees = self.employees.write().await;
        let pos = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(RepoError::NotFound(id))?;
        employees.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn payload(first: &str) -> EmployeeCreate {
        EmployeeCreate {
            first_name: first.into(),
            last_name: "Test".into(),
            email_id: format!("{}@example.com", first.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.list().await.unwrap().is_empty());
        assert!(matches!(store.get(1).await, Err(RepoError::NotFound(1))));
        store.ping().await.unwrap();
        assert_eq!(store.backend(), "memory");
    }

    #[tokio::test]
    async fn test_ids_follow_current_max() {
        let store = MemoryStore::new();
        let a = store.create(payload("Jean")).await.unwrap();
        let b = store.create(payload("Marie")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.delete(2).await.unwrap();
        let c = store.create(payload("Luc")).await.unwrap();
        assert_eq!(c.id, 2);

        store.delete(1).await.unwrap();
        let d = store.create(payload("Anne")).await.unwrap();
        assert_eq!(d.id, 3);
    }

    #[tokio::test]
    async fn test_seeded_store_continues_from_max() {
        let store = MemoryStore::with_employees(vec![Employee {
            id: 41,
            first_name: "Old".into(),
            last_name: "Record".into(),
            email_id: "old@example.com".into(),
        }]);
        let created = store.create(payload("New")).await.unwrap();
        assert_eq!(created.id, 42);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for name in ["A", "B", "C"] {
            store.create(payload(name)).await.unwrap();
        }
        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.first_name)
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_update_partial() {
        let store = MemoryStore::new();
        let created = store.create(payload("Jean")).await.unwrap();

        let updated = store
            .update(
                created.id,
                EmployeeUpdate {
                    email_id: "new@example.com".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Jean");
        assert_eq!(updated.last_name, "Test");
        assert_eq!(updated.email_id, "new@example.com");
        assert_eq!(store.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.update(7, EmployeeUpdate::default()).await,
            Err(RepoError::NotFound(7))
        ));
        assert!(matches!(store.delete(7).await, Err(RepoError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(payload(&format!("E{i}"))).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<i64>>());
    }
}
