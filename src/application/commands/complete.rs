use anyhow::Result;
use chrono::NaiveDate;

use crate::application::services::ScheduleService;

pub async fn run_complete(
    schedule_service: &ScheduleService,
    task_id: i64,
    date: NaiveDate,
) -> Result<()> {
    let updated = schedule_service
        .complete(task_id, date)
        .await
        .map_err(anyhow::Error::msg)?;

    if updated {
        println!("Marked task #{} done for {}", task_id, date);
    } else {
        println!("No assignment for task #{} on {}", task_id, date);
    }
    Ok(())
}
