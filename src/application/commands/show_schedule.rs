use anyhow::Result;
use chrono::NaiveDate;

use crate::application::commands::resolve_window;
use crate::application::services::ScheduleService;

pub async fn run_show_schedule(
    schedule_service: &ScheduleService,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let (start, end) = resolve_window(start, end)?;
    let rows = schedule_service
        .assignments(start, end)
        .await
        .map_err(anyhow::Error::msg)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No assignments between {} and {}. Run `generate` first.", start, end);
        return Ok(());
    }

    let mut current_date: Option<NaiveDate> = None;
    for row in rows {
        if current_date != Some(row.scheduled_date) {
            println!("{}", row.scheduled_date);
            current_date = Some(row.scheduled_date);
        }
        println!(
            "  [{}] #{} {} ({}, {})",
            row.status, row.task.id, row.task.name, row.task.frequency, row.task.priority
        );
    }
    Ok(())
}
