use std::sync::Arc;
use tracing::info;

use crate::domain::entities::{Frequency, Priority, Task};
use crate::domain::repositories::TaskRepository;

/// Boundary validation and CRUD for tasks. Id assignment and storage belong
/// to the repository.
#[derive(Clone)]
pub struct TaskService {
    task_repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }

    pub async fn create_task(
        &self,
        name: &str,
        frequency: &str,
        priority: &str,
    ) -> Result<Task, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Task name cannot be empty".to_string());
        }

        // Unknown frequency text would silently never be scheduled, so refuse
        // it here instead of storing it.
        let frequency = match Frequency::parse(frequency) {
            Frequency::Other(raw) => {
                return Err(format!(
                    "Unknown frequency '{}'. Use daily, weekly, bi-weekly or monthly",
                    raw
                ));
            }
            parsed => parsed,
        };
        let priority = Priority::parse(priority);

        let task = self
            .task_repo
            .add_task(name.to_string(), frequency, priority)
            .await
            .map_err(|e| e.to_string())?;

        info!(task_id = task.id, name = %task.name, "created task");
        Ok(task)
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, String> {
        self.task_repo.list_tasks().await.map_err(|e| e.to_string())
    }

    pub async fn remove_task(&self, task_id: i64) -> Result<bool, String> {
        let removed = self
            .task_repo
            .remove_task(task_id)
            .await
            .map_err(|e| e.to_string())?;
        if removed {
            info!(task_id, "removed task");
        }
        Ok(removed)
    }
}
