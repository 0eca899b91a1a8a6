use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use async_trait::async_trait;
use anyhow::Result;

use crate::core::Task;
use crate::storage::TaskStore;

/// In-memory task table. Ids start at 1 and are never reused within the
/// process lifetime; everything is lost when the process exits.
pub struct MemoryStorage {
    tasks: Arc<RwLock<HashMap<i32, Task>>>,
    next_id: Arc<RwLock<i32>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for MemoryStorage {
    async fn list_all(&self) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_where(&self, predicate: for<'a> fn(&'a Task) -> bool) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.values().filter(|t| predicate(t)).cloned().collect())
    }

    async fn insert(&self, mut task: Task) -> Result<Task> {
        let mut id_guard = self.next_id.write().await;
        task.id = *id_guard;
        *id_guard += 1;
        drop(id_guard);

        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());
        Ok(())
    }

    async fn delete(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        tasks.remove(&task.id);
        Ok(())
    }
}
