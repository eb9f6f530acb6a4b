//! Event types and the manager that executes commands off the render loop.

pub mod commander;
pub mod manager;
pub mod types;
