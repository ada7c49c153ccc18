use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use crate::domain::entities::{Frequency, Priority, Task};
use crate::domain::repositories::{RepositoryError, TaskRepository};

/// In-memory task store. Used by service-level tests; mirrors the SQLite
/// repository's behavior including id assignment.
#[derive(Debug, Default)]
pub struct MemoryTaskRepository {
    state: Mutex<MemoryTaskState>,
}

#[derive(Debug, Default)]
struct MemoryTaskState {
    tasks: BTreeMap<i64, Task>,
    next_id: i64,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskRepository {
    async fn add_task(
        &self,
        name: String,
        frequency: Frequency,
        priority: Priority,
    ) -> Result<Task, RepositoryError> {
        let mut state = self.state.lock().await;
        state.next_id += 1;
        let task = Task::new(state.next_id, name, frequency, priority);
        state.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn remove_task(&self, task_id: i64) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().await;
        Ok(state.tasks.remove(&task_id).is_some())
    }
}
