use anyhow::Result;
use chrono::NaiveDate;

use crate::application::commands::resolve_window;
use crate::application::services::ScheduleService;

pub async fn run_generate(
    schedule_service: &ScheduleService,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<()> {
    let (start, end) = resolve_window(start, end)?;
    let report = schedule_service
        .generate(start, end)
        .await
        .map_err(anyhow::Error::msg)?;

    println!("Schedule for {} .. {}", start, end);
    for (date, tasks) in &report.schedule {
        if tasks.is_empty() {
            println!("  {}  -", date);
            continue;
        }
        let names: Vec<String> = tasks
            .iter()
            .map(|t| format!("{} ({})", t.name, t.priority))
            .collect();
        println!("  {}  {}", date, names.join(", "));
    }

    if !report.unplaced.is_empty() {
        println!("Not placed:");
        for skipped in &report.unplaced {
            println!("  #{} {}: {}", skipped.task.id, skipped.task.name, skipped.reason);
        }
    }

    println!("{} new assignment(s) stored", report.inserted);
    Ok(())
}
