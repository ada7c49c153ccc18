pub mod sqlite_assignment_repository;
pub mod sqlite_task_repository;

// In-memory implementations - exercised by the service-level tests
#[allow(dead_code)]
pub mod memory_assignment_repository;
#[allow(dead_code)]
pub mod memory_task_repository;

#[allow(unused_imports)]
pub use memory_assignment_repository::MemoryAssignmentRepository;
#[allow(unused_imports)]
pub use memory_task_repository::MemoryTaskRepository;
pub use sqlite_assignment_repository::SqliteAssignmentRepository;
pub use sqlite_task_repository::SqliteTaskRepository;
