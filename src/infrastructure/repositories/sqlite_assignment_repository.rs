use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Row};
use std::collections::HashSet;

use crate::domain::entities::{
    AssignmentStatus, AssignmentWithTask, Frequency, Priority, ScheduledAssignment, Task,
};
use crate::domain::repositories::{AssignmentRepository, RepositoryError};
use crate::infrastructure::database::DatabaseManager;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_to_text(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn date_from_text(idx: usize, text: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub struct SqliteAssignmentRepository {
    db: DatabaseManager,
}

impl SqliteAssignmentRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    fn row_to_assignment_with_task(row: &Row) -> rusqlite::Result<AssignmentWithTask> {
        let date_text: String = row.get(0)?;
        let status: String = row.get(1)?;
        let frequency: String = row.get(4)?;
        let priority: String = row.get(5)?;
        Ok(AssignmentWithTask {
            scheduled_date: date_from_text(0, &date_text)?,
            status: AssignmentStatus::parse(&status),
            task: Task::new(
                row.get(2)?,
                row.get(3)?,
                Frequency::parse(&frequency),
                Priority::parse(&priority),
            ),
        })
    }
}

#[async_trait]
impl AssignmentRepository for SqliteAssignmentRepository {
    /// One transaction for the whole batch; each pair is looked up before it
    /// is inserted so re-running a generation never duplicates a row or
    /// resets its status.
    async fn insert_new(
        &self,
        assignments: Vec<ScheduledAssignment>,
    ) -> Result<usize, RepositoryError> {
        self.db
            .execute_blocking(move |conn| {
                let tx = conn.transaction()?;
                let mut inserted = 0;
                for assignment in &assignments {
                    let date_text = date_to_text(assignment.scheduled_date);
                    let exists: bool = tx.query_row(
                        "SELECT EXISTS(
                             SELECT 1 FROM scheduled_assignments
                             WHERE task_id = ?1 AND scheduled_date = ?2
                         )",
                        params![assignment.task_id, date_text],
                        |row| row.get(0),
                    )?;
                    if !exists {
                        tx.execute(
                            "INSERT INTO scheduled_assignments (task_id, scheduled_date, status)
                             VALUES (?1, ?2, ?3)",
                            params![assignment.task_id, date_text, assignment.status.as_str()],
                        )?;
                        inserted += 1;
                    }
                }
                tx.commit()?;
                Ok(inserted)
            })
            .await
    }

    async fn assigned_pairs(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashSet<(i64, NaiveDate)>, RepositoryError> {
        let (start_text, end_text) = (date_to_text(start), date_to_text(end));
        self.db
            .execute_blocking(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT task_id, scheduled_date FROM scheduled_assignments
                     WHERE scheduled_date BETWEEN ?1 AND ?2",
                )?;
                let pairs = stmt
                    .query_map(params![start_text, end_text], |row| {
                        let task_id: i64 = row.get(0)?;
                        let date_text: String = row.get(1)?;
                        Ok((task_id, date_from_text(1, &date_text)?))
                    })?
                    .collect::<rusqlite::Result<HashSet<(i64, NaiveDate)>>>()?;
                Ok(pairs)
            })
            .await
    }

    async fn list_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AssignmentWithTask>, RepositoryError> {
        let (start_text, end_text) = (date_to_text(start), date_to_text(end));
        self.db
            .execute_blocking(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT a.scheduled_date, a.status, t.id, t.name, t.frequency, t.priority
                     FROM scheduled_assignments a
                     JOIN tasks t ON t.id = a.task_id
                     WHERE a.scheduled_date BETWEEN ?1 AND ?2
                     ORDER BY a.scheduled_date ASC,
                              CASE t.priority
                                  WHEN 'high' THEN 1
                                  WHEN 'mid' THEN 2
                                  ELSE 3
                              END ASC,
                              t.id ASC",
                )?;
                let rows = stmt
                    .query_map(params![start_text, end_text], |row| {
                        Self::row_to_assignment_with_task(row)
                    })?
                    .collect::<rusqlite::Result<Vec<AssignmentWithTask>>>()?;
                Ok(rows)
            })
            .await
    }

    async fn set_status(
        &self,
        task_id: i64,
        scheduled_date: NaiveDate,
        status: AssignmentStatus,
    ) -> Result<bool, RepositoryError> {
        let date_text = date_to_text(scheduled_date);
        self.db
            .execute_blocking(move |conn| {
                let affected = conn.execute(
                    "UPDATE scheduled_assignments SET status = ?3
                     WHERE task_id = ?1 AND scheduled_date = ?2",
                    params![task_id, date_text, status.as_str()],
                )?;
                Ok(affected > 0)
            })
            .await
    }

    async fn clear_all(&self) -> Result<usize, RepositoryError> {
        self.db
            .execute_blocking(|conn| conn.execute("DELETE FROM scheduled_assignments", []))
            .await
    }
}
