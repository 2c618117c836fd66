/*!
 * Core Module
 * Fundamental simulation types and error handling
 */

pub mod errors;
pub mod serde;
pub mod types;

// Re-export for convenience
pub use errors::SimulationError;
pub use types::{SimResult, TaskId, Time, DEFAULT_QUANTUM};
