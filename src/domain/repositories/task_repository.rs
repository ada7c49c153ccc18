use async_trait::async_trait;

use crate::domain::entities::{Frequency, Priority, Task};
use crate::domain::repositories::RepositoryError;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task and return it with its storage-assigned id.
    async fn add_task(
        &self,
        name: String,
        frequency: Frequency,
        priority: Priority,
    ) -> Result<Task, RepositoryError>;

    /// All tasks, in insertion order.
    async fn list_tasks(&self) -> Result<Vec<Task>, RepositoryError>;

    /// Delete a task (and its assignments). Returns false if the id was unknown.
    async fn remove_task(&self, task_id: i64) -> Result<bool, RepositoryError>;
}
