use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

use crate::domain::entities::{AssignmentStatus, AssignmentWithTask, ScheduledAssignment};
use crate::domain::repositories::RepositoryError;

/// Store for generated assignments. Uniqueness on (task_id, scheduled_date)
/// is this layer's responsibility: `insert_new` checks for an existing pair
/// before inserting, inside a single transaction.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Insert assignments as one batch, skipping pairs already present.
    /// Returns the number actually inserted.
    async fn insert_new(
        &self,
        assignments: Vec<ScheduledAssignment>,
    ) -> Result<usize, RepositoryError>;

    /// The (task_id, scheduled_date) pairs already stored for the window.
    async fn assigned_pairs(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashSet<(i64, NaiveDate)>, RepositoryError>;

    /// Assignments in the window joined with their tasks, ordered by date
    /// then priority rank.
    async fn list_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AssignmentWithTask>, RepositoryError>;

    /// Update one assignment's status. Returns false if no such pair exists.
    async fn set_status(
        &self,
        task_id: i64,
        scheduled_date: NaiveDate,
        status: AssignmentStatus,
    ) -> Result<bool, RepositoryError>;

    /// Wipe every assignment. Returns the number removed.
    async fn clear_all(&self) -> Result<usize, RepositoryError>;
}
