pub mod assignment_repository;
pub mod task_repository;

pub use assignment_repository::AssignmentRepository;
pub use task_repository::TaskRepository;

#[derive(Debug)]
pub enum RepositoryError {
    Storage(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RepositoryError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}
