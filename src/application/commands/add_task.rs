use anyhow::Result;

use crate::application::services::TaskService;

pub async fn run_add_task(
    task_service: &TaskService,
    name: &str,
    frequency: &str,
    priority: &str,
) -> Result<()> {
    let task = task_service
        .create_task(name, frequency, priority)
        .await
        .map_err(anyhow::Error::msg)?;

    println!(
        "Added task #{}: {} ({}, {})",
        task.id, task.name, task.frequency, task.priority
    );
    Ok(())
}
