/*!
 * Core Types
 * Common types used across the simulation core
 */

/// Simulated clock value, in abstract integer ticks
pub type Time = u64;

/// Caller-chosen task identifier
///
/// Opaque to the core; uniqueness within a run is the caller's
/// responsibility and is not enforced here.
pub type TaskId = String;

/// Round Robin quantum used when the caller does not pick one
pub const DEFAULT_QUANTUM: Time = 2;

/// Common result type for simulation operations
pub type SimResult<T> = Result<T, super::errors::SimulationError>;
