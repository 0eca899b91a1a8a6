pub mod memory;

use async_trait::async_trait;
use crate::core::Task;

/// Persistence contract consumed by the HTTP handlers. Any conforming
/// backend works; ids are assigned by the store on insert.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list_all(&self) -> anyhow::Result<Vec<Task>>;
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Task>>;
    async fn list_where(&self, predicate: for<'a> fn(&'a Task) -> bool) -> anyhow::Result<Vec<Task>>;
    async fn insert(&self, task: Task) -> anyhow::Result<Task>;
    async fn update(&self, task: &Task) -> anyhow::Result<()>;
    async fn delete(&self, task: &Task) -> anyhow::Result<()>;
}
