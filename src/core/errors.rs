/*!
 * Error Types
 * Simulation error taxonomy with thiserror, miette, and serde support
 */

use crate::core::types::{TaskId, Time};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller-input errors, detected synchronously before any task is mutated
///
/// Once an input passes validation, FCFS and Round Robin are total
/// functions over it: there are no recoverable mid-run errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Empty task set")]
    #[diagnostic(
        code(scheduler::empty_task_set),
        help("Add at least one task before scheduling; aggregates over zero tasks are undefined.")
    )]
    EmptyTaskSet,

    #[error("Invalid quantum: {quantum}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round Robin needs a time slice of at least 1 tick.")
    )]
    InvalidQuantum { quantum: Time },

    #[error("Invalid task {id}: burst time must be positive")]
    #[diagnostic(
        code(scheduler::invalid_task),
        help("Every task needs a burst of at least 1 tick.")
    )]
    InvalidTask { id: TaskId },

    #[error("Task {id} has not been scheduled")]
    #[diagnostic(
        code(metrics::incomplete_task),
        help("Run a policy over the task set before deriving aggregate metrics.")
    )]
    IncompleteTask { id: TaskId },
}
