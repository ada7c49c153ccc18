pub mod add_task;
pub mod clear_schedule;
pub mod complete;
pub mod generate;
pub mod list_tasks;
pub mod remove_task;
pub mod show_schedule;

pub use add_task::run_add_task;
pub use clear_schedule::run_clear_schedule;
pub use complete::run_complete;
pub use generate::run_generate;
pub use list_tasks::run_list_tasks;
pub use remove_task::run_remove_task;
pub use show_schedule::run_show_schedule;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};

use crate::application::scheduler::week_window;

/// Resolve an optional --start/--end pair to a concrete window, defaulting to
/// the current Monday..Sunday week.
pub fn resolve_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(NaiveDate, NaiveDate)> {
    match (start, end) {
        (Some(start), Some(end)) => {
            if start > end {
                bail!("--start must not be after --end");
            }
            Ok((start, end))
        }
        (None, None) => Ok(week_window(Local::now().date_naive())),
        _ => bail!("--start and --end must be given together"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn explicit_window_passes_through() {
        let window = resolve_window(Some(date(2025, 1, 1)), Some(date(2025, 1, 7))).unwrap();
        assert_eq!(window, (date(2025, 1, 1), date(2025, 1, 7)));
    }

    #[test]
    fn half_specified_window_is_an_error() {
        assert!(resolve_window(Some(date(2025, 1, 1)), None).is_err());
        assert!(resolve_window(None, Some(date(2025, 1, 7))).is_err());
    }

    #[test]
    fn reversed_window_is_an_error() {
        assert!(resolve_window(Some(date(2025, 1, 7)), Some(date(2025, 1, 1))).is_err());
    }
}
