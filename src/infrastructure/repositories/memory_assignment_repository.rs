use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{
    AssignmentStatus, AssignmentWithTask, ScheduledAssignment, Task,
};
use crate::domain::repositories::{
    AssignmentRepository, RepositoryError, TaskRepository,
};

/// In-memory assignment store keyed by (task_id, scheduled_date). Holds a
/// handle to the task repository so range listings can join task attributes
/// the way the SQLite repository does with SQL.
pub struct MemoryAssignmentRepository {
    task_repo: Arc<dyn TaskRepository>,
    assignments: Mutex<BTreeMap<(i64, NaiveDate), AssignmentStatus>>,
}

impl MemoryAssignmentRepository {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            task_repo,
            assignments: Mutex::new(BTreeMap::new()),
        }
    }
}

#[async_trait]
impl AssignmentRepository for MemoryAssignmentRepository {
    async fn insert_new(
        &self,
        assignments: Vec<ScheduledAssignment>,
    ) -> Result<usize, RepositoryError> {
        let mut stored = self.assignments.lock().await;
        let mut inserted = 0;
        for assignment in assignments {
            let key = (assignment.task_id, assignment.scheduled_date);
            if !stored.contains_key(&key) {
                stored.insert(key, assignment.status);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn assigned_pairs(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashSet<(i64, NaiveDate)>, RepositoryError> {
        let stored = self.assignments.lock().await;
        Ok(stored
            .keys()
            .filter(|(_, date)| *date >= start && *date <= end)
            .copied()
            .collect())
    }

    async fn list_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AssignmentWithTask>, RepositoryError> {
        let tasks: BTreeMap<i64, Task> = self
            .task_repo
            .list_tasks()
            .await?
            .into_iter()
            .map(|task| (task.id, task))
            .collect();

        let stored = self.assignments.lock().await;
        let mut rows: Vec<AssignmentWithTask> = stored
            .iter()
            .filter(|((_, date), _)| *date >= start && *date <= end)
            .filter_map(|((task_id, date), status)| {
                tasks.get(task_id).map(|task| AssignmentWithTask {
                    scheduled_date: *date,
                    status: *status,
                    task: task.clone(),
                })
            })
            .collect();

        rows.sort_by_key(|row| (row.scheduled_date, row.task.priority.rank()));
        Ok(rows)
    }

    async fn set_status(
        &self,
        task_id: i64,
        scheduled_date: NaiveDate,
        status: AssignmentStatus,
    ) -> Result<bool, RepositoryError> {
        let mut stored = self.assignments.lock().await;
        match stored.get_mut(&(task_id, scheduled_date)) {
            Some(current) => {
                *current = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn clear_all(&self) -> Result<usize, RepositoryError> {
        let mut stored = self.assignments.lock().await;
        let removed = stored.len();
        stored.clear();
        Ok(removed)
    }
}
