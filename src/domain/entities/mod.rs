pub mod scheduled_assignment;
pub mod task;

pub use scheduled_assignment::{AssignmentStatus, AssignmentWithTask, ScheduledAssignment};
pub use task::{Frequency, Priority, Task};
