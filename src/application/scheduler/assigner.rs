use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::application::scheduler::date_range::{candidate_dates, expand_date_range};
use crate::domain::entities::{Frequency, Task};

/// Upper bound on tasks assigned to a single date. A fairness bound, not
/// derived from the task count.
pub const MAX_TASKS_PER_DAY: usize = 3;

/// Dates in calendar order, tasks within a date in placement order.
pub type Schedule = BTreeMap<NaiveDate, Vec<Task>>;

/// Result of one generation run: the schedule plus every task that could not
/// be placed anywhere, with the reason it was skipped.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleOutcome {
    pub schedule: Schedule,
    pub unplaced: Vec<UnplacedTask>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnplacedTask {
    pub task: Task,
    pub reason: UnplacedReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedReason {
    /// The frequency text was not recognized, so no dates qualify.
    UnrecognizedFrequency(String),
    /// The window contains no occurrence date for this frequency
    /// (e.g. a weekly task over a window with no Monday in it).
    NoEligibleDates,
    /// Every eligible date was already holding the maximum number of tasks.
    AtCapacity,
}

impl std::fmt::Display for UnplacedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            UnplacedReason::UnrecognizedFrequency(raw) => {
                write!(f, "unrecognized frequency '{}'", raw)
            }
            UnplacedReason::NoEligibleDates => write!(f, "no eligible dates in window"),
            UnplacedReason::AtCapacity => write!(f, "all eligible dates at capacity"),
        }
    }
}

/// Build a schedule for the window. Pure and deterministic: same tasks, same
/// window, same result.
///
/// Tasks are taken in priority order (stable sort, so equal priorities keep
/// their input order — that decides who wins a contested slot). Each task is
/// assigned to every candidate date of its frequency that still has room; a
/// date at capacity is skipped silently. Tasks placed nowhere come back in
/// `unplaced` instead of being dropped.
pub fn generate_schedule(tasks: &[Task], start: NaiveDate, end: NaiveDate) -> ScheduleOutcome {
    let mut schedule: Schedule = expand_date_range(start, end)
        .into_iter()
        .map(|date| (date, Vec::new()))
        .collect();

    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by_key(|task| task.priority.rank());

    let mut unplaced = Vec::new();
    for task in ordered {
        let candidates = candidate_dates(&task.frequency, start, end);
        if candidates.is_empty() {
            let reason = match &task.frequency {
                Frequency::Other(raw) => UnplacedReason::UnrecognizedFrequency(raw.clone()),
                _ => UnplacedReason::NoEligibleDates,
            };
            unplaced.push(UnplacedTask {
                task: task.clone(),
                reason,
            });
            continue;
        }

        let mut placed = false;
        for date in candidates {
            if let Some(slots) = schedule.get_mut(&date) {
                if slots.len() < MAX_TASKS_PER_DAY {
                    slots.push(task.clone());
                    placed = true;
                }
            }
        }
        if !placed {
            unplaced.push(UnplacedTask {
                task: task.clone(),
                reason: UnplacedReason::AtCapacity,
            });
        }
    }

    ScheduleOutcome { schedule, unplaced }
}
