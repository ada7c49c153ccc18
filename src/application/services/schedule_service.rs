use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::scheduler::{generate_schedule, Schedule, UnplacedTask};
use crate::domain::entities::{
    AssignmentStatus, AssignmentWithTask, ScheduledAssignment,
};
use crate::domain::repositories::{AssignmentRepository, TaskRepository};

/// What one `generate` run produced: the in-memory schedule, the tasks that
/// could not be placed, and how many assignments were new to storage.
#[derive(Debug)]
pub struct GenerateReport {
    pub schedule: Schedule,
    pub unplaced: Vec<UnplacedTask>,
    pub inserted: usize,
}

/// Orchestrates schedule generation against storage. The generation itself is
/// pure; this service sequences the reads before it and batches the inserts
/// after it, skipping (task_id, date) pairs that already exist so
/// regeneration never duplicates or resets an assignment.
#[derive(Clone)]
pub struct ScheduleService {
    task_repo: Arc<dyn TaskRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
}

impl ScheduleService {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
    ) -> Self {
        Self {
            task_repo,
            assignment_repo,
        }
    }

    pub async fn generate(&self, start: NaiveDate, end: NaiveDate) -> Result<GenerateReport, String> {
        let tasks = self.task_repo.list_tasks().await.map_err(|e| e.to_string())?;
        let existing = self
            .assignment_repo
            .assigned_pairs(start, end)
            .await
            .map_err(|e| e.to_string())?;

        let outcome = generate_schedule(&tasks, start, end);

        for skipped in &outcome.unplaced {
            warn!(
                task_id = skipped.task.id,
                name = %skipped.task.name,
                reason = %skipped.reason,
                "task not placed"
            );
        }

        let new_assignments: Vec<ScheduledAssignment> = outcome
            .schedule
            .iter()
            .flat_map(|(date, tasks)| {
                tasks
                    .iter()
                    .filter(|task| !existing.contains(&(task.id, *date)))
                    .map(|task| ScheduledAssignment::pending(task.id, *date))
            })
            .collect();

        let inserted = self
            .assignment_repo
            .insert_new(new_assignments)
            .await
            .map_err(|e| e.to_string())?;

        info!(%start, %end, inserted, "generated schedule");
        Ok(GenerateReport {
            schedule: outcome.schedule,
            unplaced: outcome.unplaced,
            inserted,
        })
    }

    pub async fn assignments(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AssignmentWithTask>, String> {
        self.assignment_repo
            .list_range(start, end)
            .await
            .map_err(|e| e.to_string())
    }

    /// Mark one assignment done. Status changes are the caller's business,
    /// never the generator's.
    pub async fn complete(&self, task_id: i64, date: NaiveDate) -> Result<bool, String> {
        self.assignment_repo
            .set_status(task_id, date, AssignmentStatus::Done)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn clear(&self) -> Result<usize, String> {
        let removed = self
            .assignment_repo
            .clear_all()
            .await
            .map_err(|e| e.to_string())?;
        info!(removed, "cleared all assignments");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Frequency, Priority};
    use crate::infrastructure::repositories::{MemoryAssignmentRepository, MemoryTaskRepository};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn service_with_tasks(specs: &[(&str, Frequency, Priority)]) -> ScheduleService {
        let task_repo = Arc::new(MemoryTaskRepository::new());
        for (name, frequency, priority) in specs {
            task_repo
                .add_task(name.to_string(), frequency.clone(), *priority)
                .await
                .unwrap();
        }
        let assignment_repo = Arc::new(MemoryAssignmentRepository::new(task_repo.clone()));
        ScheduleService::new(task_repo, assignment_repo)
    }

    #[tokio::test]
    async fn generate_inserts_pending_assignments() {
        let service =
            service_with_tasks(&[("dishes", Frequency::Daily, Priority::High)]).await;
        let report = service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();

        assert_eq!(report.inserted, 7);
        let stored = service
            .assignments(date(2025, 1, 6), date(2025, 1, 12))
            .await
            .unwrap();
        assert_eq!(stored.len(), 7);
        assert!(stored.iter().all(|a| a.status == AssignmentStatus::Pending));
    }

    #[tokio::test]
    async fn regeneration_is_idempotent() {
        let service = service_with_tasks(&[
            ("dishes", Frequency::Daily, Priority::High),
            ("laundry", Frequency::Weekly, Priority::Mid),
        ])
        .await;

        let first = service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();
        let second = service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();

        assert_eq!(first.inserted, 8);
        assert_eq!(second.inserted, 0);
        assert_eq!(first.schedule, second.schedule);
    }

    #[tokio::test]
    async fn regeneration_adds_only_new_tasks() {
        let task_repo = Arc::new(MemoryTaskRepository::new());
        task_repo
            .add_task("dishes".to_string(), Frequency::Daily, Priority::High)
            .await
            .unwrap();
        let assignment_repo = Arc::new(MemoryAssignmentRepository::new(task_repo.clone()));
        let service = ScheduleService::new(task_repo.clone(), assignment_repo);

        service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();
        task_repo
            .add_task("laundry".to_string(), Frequency::Weekly, Priority::Low)
            .await
            .unwrap();
        let report = service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();

        // only the weekly task's single occurrence is new
        assert_eq!(report.inserted, 1);
    }

    #[tokio::test]
    async fn completed_assignments_survive_regeneration() {
        let service =
            service_with_tasks(&[("dishes", Frequency::Daily, Priority::High)]).await;
        service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();

        assert!(service.complete(1, date(2025, 1, 7)).await.unwrap());
        service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();

        let stored = service
            .assignments(date(2025, 1, 7), date(2025, 1, 7))
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, AssignmentStatus::Done);
    }

    #[tokio::test]
    async fn clear_empties_storage_and_regeneration_refills() {
        let service =
            service_with_tasks(&[("dishes", Frequency::Daily, Priority::High)]).await;
        service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();

        assert_eq!(service.clear().await.unwrap(), 7);
        assert!(service
            .assignments(date(2025, 1, 6), date(2025, 1, 12))
            .await
            .unwrap()
            .is_empty());

        let report = service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();
        assert_eq!(report.inserted, 7);
    }

    #[tokio::test]
    async fn unplaced_tasks_are_reported_not_stored() {
        let task_repo = Arc::new(MemoryTaskRepository::new());
        task_repo
            .add_task(
                "audit".to_string(),
                Frequency::Other("yearly".to_string()),
                Priority::High,
            )
            .await
            .unwrap();
        let assignment_repo = Arc::new(MemoryAssignmentRepository::new(task_repo.clone()));
        let service = ScheduleService::new(task_repo, assignment_repo);

        let report = service.generate(date(2025, 1, 6), date(2025, 1, 12)).await.unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.unplaced.len(), 1);
    }
}
