use anyhow::Result;

use crate::application::services::ScheduleService;

pub async fn run_clear_schedule(schedule_service: &ScheduleService) -> Result<()> {
    let removed = schedule_service.clear().await.map_err(anyhow::Error::msg)?;
    println!("Cleared {} assignment(s)", removed);
    Ok(())
}
