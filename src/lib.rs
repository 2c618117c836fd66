/*!
 * Schedsim
 * CPU scheduling simulator: dispatch policies over a task set, with a full
 * execution timeline, per-task results, and run-level aggregates
 */

pub mod core;
pub mod render;
pub mod replay;
pub mod scheduler;
pub mod task;
pub mod timeline;

// Re-export the main types at the crate root
pub use core::errors::SimulationError;
pub use core::types::{SimResult, TaskId, Time, DEFAULT_QUANTUM};
pub use replay::{ReplayCursor, Tick};
pub use scheduler::{Aggregates, Policy, Schedule, Scheduler};
pub use task::Task;
pub use timeline::{ExecutionBlock, Timeline};
