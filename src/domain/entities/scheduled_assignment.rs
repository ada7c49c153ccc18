use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::domain::entities::task::Task;

/// One occurrence of a task on a concrete date. Holds a task id, never the
/// task itself; task lifetime is owned by the task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledAssignment {
    pub task_id: i64,
    pub scheduled_date: NaiveDate,
    pub status: AssignmentStatus,
}

impl ScheduledAssignment {
    /// A freshly generated assignment; everything starts out pending.
    pub fn pending(task_id: i64, scheduled_date: NaiveDate) -> Self {
        Self {
            task_id,
            scheduled_date,
            status: AssignmentStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Done,
}

impl AssignmentStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "done" => AssignmentStatus::Done,
            _ => AssignmentStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Done => "done",
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An assignment joined with its task attributes, as returned by range
/// queries for display.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentWithTask {
    pub scheduled_date: NaiveDate,
    pub status: AssignmentStatus,
    pub task: Task,
}
