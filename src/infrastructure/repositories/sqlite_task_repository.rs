use async_trait::async_trait;
use rusqlite::{params, Row};

use crate::domain::entities::{Frequency, Priority, Task};
use crate::domain::repositories::{RepositoryError, TaskRepository};
use crate::infrastructure::database::DatabaseManager;

pub struct SqliteTaskRepository {
    db: DatabaseManager,
}

impl SqliteTaskRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
        let frequency: String = row.get("frequency")?;
        let priority: String = row.get("priority")?;
        Ok(Task::new(
            row.get("id")?,
            row.get("name")?,
            Frequency::parse(&frequency),
            Priority::parse(&priority),
        ))
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn add_task(
        &self,
        name: String,
        frequency: Frequency,
        priority: Priority,
    ) -> Result<Task, RepositoryError> {
        self.db
            .execute_blocking(move |conn| {
                conn.execute(
                    "INSERT INTO tasks (name, frequency, priority) VALUES (?1, ?2, ?3)",
                    params![name, frequency.as_str(), priority.as_str()],
                )?;
                let id = conn.last_insert_rowid();
                Ok(Task::new(id, name, frequency, priority))
            })
            .await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, RepositoryError> {
        self.db
            .execute_blocking(|conn| {
                let mut stmt =
                    conn.prepare("SELECT id, name, frequency, priority FROM tasks ORDER BY id")?;
                let tasks = stmt
                    .query_map([], |row| Self::row_to_task(row))?
                    .collect::<rusqlite::Result<Vec<Task>>>()?;
                Ok(tasks)
            })
            .await
    }

    async fn remove_task(&self, task_id: i64) -> Result<bool, RepositoryError> {
        // assignments go with it via ON DELETE CASCADE
        self.db
            .execute_blocking(move |conn| {
                let affected = conn.execute("DELETE FROM tasks WHERE id = ?1", params![task_id])?;
                Ok(affected > 0)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo(dir: &tempfile::TempDir) -> SqliteTaskRepository {
        let db = DatabaseManager::new(dir.path().join("tasks.db")).unwrap();
        db.initialize().await.unwrap();
        SqliteTaskRepository::new(db)
    }

    #[tokio::test]
    async fn add_list_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir).await;

        let task = repo
            .add_task("dishes".to_string(), Frequency::Daily, Priority::High)
            .await
            .unwrap();
        assert_eq!(task.id, 1);

        let tasks = repo.list_tasks().await.unwrap();
        assert_eq!(tasks, vec![task]);

        assert!(repo.remove_task(1).await.unwrap());
        assert!(!repo.remove_task(1).await.unwrap());
        assert!(repo.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_frequency_text_survives_as_other() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir).await;

        repo.db
            .execute_blocking(|conn| {
                conn.execute(
                    "INSERT INTO tasks (name, frequency, priority) VALUES ('audit', 'yearly', 'high')",
                    [],
                )
            })
            .await
            .unwrap();

        let tasks = repo.list_tasks().await.unwrap();
        assert_eq!(tasks[0].frequency, Frequency::Other("yearly".to_string()));
    }
}
