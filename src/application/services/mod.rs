pub mod schedule_service;
pub mod task_service;

pub use schedule_service::ScheduleService;
pub use task_service::TaskService;

#[allow(unused_imports)]
pub use schedule_service::GenerateReport;
