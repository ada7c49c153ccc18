use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::entities::Frequency;

/// Every date from `start` to `end` inclusive, ascending. A reversed window
/// (`start > end`) yields an empty range rather than an error.
pub fn expand_date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// The dates within the window eligible for a task of the given frequency.
///
/// Each frequency is a stride over the window anchored to its natural period
/// boundary: daily strides one day, weekly and bi-weekly stride from the
/// Monday of the week containing `start`, monthly strides from month starts.
/// Anchors falling before `start` are dropped so assignments stay inside the
/// window. Unrecognized frequencies produce no candidates.
pub fn candidate_dates(frequency: &Frequency, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    match frequency {
        Frequency::Daily => expand_date_range(start, end),
        Frequency::Weekly => stride_from_week_start(start, end, 7),
        Frequency::BiWeekly => stride_from_week_start(start, end, 14),
        Frequency::Monthly => month_starts(start, end),
        Frequency::Other(_) => Vec::new(),
    }
}

/// Monday..Sunday of the week containing `date`, the default scheduling window.
pub fn week_window(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = week_start(date);
    (monday, monday + Duration::days(6))
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn stride_from_week_start(start: NaiveDate, end: NaiveDate, step_days: i64) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut anchor = week_start(start);
    while anchor <= end {
        if anchor >= start {
            dates.push(anchor);
        }
        anchor = anchor + Duration::days(step_days);
    }
    dates
}

fn month_starts(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut anchor = match NaiveDate::from_ymd_opt(start.year(), start.month(), 1) {
        Some(d) => d,
        None => return dates,
    };
    while anchor <= end {
        if anchor >= start {
            dates.push(anchor);
        }
        let (year, month) = if anchor.month() == 12 {
            (anchor.year() + 1, 1)
        } else {
            (anchor.year(), anchor.month() + 1)
        };
        anchor = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(d) => d,
            None => break,
        };
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn expands_inclusive_week() {
        let dates = expand_date_range(date(2025, 1, 1), date(2025, 1, 7));
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2025, 1, 1));
        assert_eq!(dates[6], date(2025, 1, 7));
    }

    #[test]
    fn single_day_window_expands_to_itself() {
        assert_eq!(
            expand_date_range(date(2025, 3, 15), date(2025, 3, 15)),
            vec![date(2025, 3, 15)]
        );
    }

    #[test]
    fn reversed_window_is_empty() {
        assert!(expand_date_range(date(2025, 1, 7), date(2025, 1, 1)).is_empty());
    }

    #[test]
    fn daily_candidates_cover_every_date() {
        let dates = candidate_dates(&Frequency::Daily, date(2025, 1, 1), date(2025, 1, 7));
        assert_eq!(dates, expand_date_range(date(2025, 1, 1), date(2025, 1, 7)));
    }

    #[test]
    fn weekly_candidate_in_midweek_window_is_the_inner_monday() {
        // 2025-01-01 is a Wednesday; the Monday of its week (2024-12-30)
        // falls before the window and must be dropped.
        let dates = candidate_dates(&Frequency::Weekly, date(2025, 1, 1), date(2025, 1, 7));
        assert_eq!(dates, vec![date(2025, 1, 6)]);
    }

    #[test]
    fn weekly_candidates_hit_each_monday() {
        let dates = candidate_dates(&Frequency::Weekly, date(2025, 1, 6), date(2025, 1, 19));
        assert_eq!(dates, vec![date(2025, 1, 6), date(2025, 1, 13)]);
    }

    #[test]
    fn bi_weekly_candidates_skip_alternate_weeks() {
        let dates = candidate_dates(&Frequency::BiWeekly, date(2025, 1, 6), date(2025, 2, 2));
        assert_eq!(dates, vec![date(2025, 1, 6), date(2025, 1, 20)]);
    }

    #[test]
    fn monthly_candidates_are_month_starts_inside_window() {
        let dates = candidate_dates(&Frequency::Monthly, date(2024, 12, 15), date(2025, 2, 10));
        assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 2, 1)]);
    }

    #[test]
    fn monthly_window_without_a_month_start_is_empty() {
        assert!(candidate_dates(&Frequency::Monthly, date(2025, 1, 8), date(2025, 1, 14)).is_empty());
    }

    #[test]
    fn unrecognized_frequency_has_no_candidates() {
        let freq = Frequency::Other("yearly".to_string());
        assert!(candidate_dates(&freq, date(2025, 1, 1), date(2025, 1, 7)).is_empty());
    }

    #[test]
    fn week_window_spans_monday_to_sunday() {
        let (start, end) = week_window(date(2025, 1, 1));
        assert_eq!(start, date(2024, 12, 30));
        assert_eq!(end, date(2025, 1, 5));
    }

    #[test]
    fn week_window_of_a_monday_starts_on_it() {
        let (start, end) = week_window(date(2025, 1, 6));
        assert_eq!(start, date(2025, 1, 6));
        assert_eq!(end, date(2025, 1, 12));
    }
}
