use anyhow::Result;

use crate::application::services::TaskService;

pub async fn run_remove_task(task_service: &TaskService, task_id: i64) -> Result<()> {
    let removed = task_service
        .remove_task(task_id)
        .await
        .map_err(anyhow::Error::msg)?;

    if removed {
        println!("Removed task #{} and its assignments", task_id);
    } else {
        println!("No task with id {}", task_id);
    }
    Ok(())
}
