pub mod commands;
pub mod scheduler;
pub mod services;
