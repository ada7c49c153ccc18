pub mod assigner;
pub mod date_range;

pub use assigner::{generate_schedule, Schedule, UnplacedTask};
pub use date_range::week_window;

// Re-exports for callers that inspect outcomes or derive candidates directly
#[allow(unused_imports)]
pub use assigner::{ScheduleOutcome, UnplacedReason, MAX_TASKS_PER_DAY};
#[allow(unused_imports)]
pub use date_range::{candidate_dates, expand_date_range};
