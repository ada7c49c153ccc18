use anyhow::Result;

use crate::application::services::TaskService;

pub async fn run_list_tasks(task_service: &TaskService, json: bool) -> Result<()> {
    let tasks = task_service.list_tasks().await.map_err(anyhow::Error::msg)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks yet. Add one with `add-task`.");
        return Ok(());
    }

    println!("{:<6} {:<24} {:<10} {:<8}", "id", "name", "frequency", "priority");
    for task in tasks {
        println!(
            "{:<6} {:<24} {:<10} {:<8}",
            task.id, task.name, task.frequency, task.priority
        );
    }
    Ok(())
}
