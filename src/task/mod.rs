/*!
 * Task Model
 * The schedulable unit: immutable descriptor, mutable run state, derived results
 */

use crate::core::errors::SimulationError;
use crate::core::serde::is_none;
use crate::core::types::{SimResult, TaskId, Time};
use serde::{Deserialize, Deserializer, Serialize};

/// One schedulable unit of work
///
/// `id`, `arrival`, and `burst` are fixed at construction. `remaining` and
/// the result fields are driven by a policy run: `remaining` counts down to
/// zero, and at that instant `completion`, `turnaround`, and `waiting` are
/// set together, exactly once. [`Task::reset`] restores the freshly
/// constructed state, which the scheduler does before every run so the same
/// list can be re-scheduled under a different policy without residue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Task {
    pub id: TaskId,
    pub arrival: Time,
    pub burst: Time,
    pub remaining: Time,
    #[serde(skip_serializing_if = "is_none")]
    pub completion: Option<Time>,
    #[serde(skip_serializing_if = "is_none")]
    pub turnaround: Option<Time>,
    #[serde(skip_serializing_if = "is_none")]
    pub waiting: Option<Time>,
}

impl Task {
    /// Create a task that has not run yet
    pub fn new(id: impl Into<TaskId>, arrival: Time, burst: Time) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            remaining: burst,
            completion: None,
            turnaround: None,
            waiting: None,
        }
    }

    /// Restore the freshly constructed state
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.completion = None;
        self.turnaround = None;
        self.waiting = None;
    }

    /// Whether a policy run has finished this task
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// Reject descriptors the policies cannot schedule
    pub fn validate(&self) -> SimResult<()> {
        if self.burst == 0 {
            return Err(SimulationError::InvalidTask {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Mark the task finished at `clock` and derive its result fields
    ///
    /// `turnaround = completion - arrival` and `waiting = turnaround - burst`;
    /// both are non-negative for any schedule that never runs a task before
    /// it arrives.
    pub(crate) fn complete_at(&mut self, clock: Time) {
        debug_assert_eq!(self.remaining, 0, "task completed with time left");
        debug_assert!(self.completion.is_none(), "completion set twice");
        let turnaround = clock - self.arrival;
        self.completion = Some(clock);
        self.turnaround = Some(turnaround);
        self.waiting = Some(turnaround - self.burst);
    }
}

/// Deserializes the boundary descriptor shape `{id, arrival, burst}`;
/// run state always starts fresh.
impl<'de> Deserialize<'de> for Task {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "snake_case")]
        struct Descriptor {
            id: TaskId,
            arrival: Time,
            burst: Time,
        }

        let descriptor = Descriptor::deserialize(deserializer)?;
        Ok(Task::new(descriptor.id, descriptor.arrival, descriptor.burst))
    }
}
