/*!
 * Scheduler
 * Policy selection and the run façade over dispatch, timeline, and metrics
 */

mod fcfs;
mod metrics;
mod round_robin;

pub use metrics::Aggregates;

use crate::core::errors::SimulationError;
use crate::core::types::{SimResult, Time, DEFAULT_QUANTUM};
use crate::task::Task;
use crate::timeline::Timeline;
use log::info;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Dispatch policy for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// Non-preemptive, arrival order
    #[default]
    Fcfs,
    /// Preemptive, fixed quantum over a FIFO ready queue
    RoundRobin { quantum: Time },
}

impl Policy {
    /// Round robin with the given quantum
    pub const fn round_robin(quantum: Time) -> Self {
        Self::RoundRobin { quantum }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::RoundRobin { .. } => "round_robin",
        }
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "first_come_first_served" => Ok(Self::Fcfs),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin {
                quantum: DEFAULT_QUANTUM,
            }),
            _ => Err(format!("Invalid policy '{s}'. Valid: fcfs, round_robin")),
        }
    }
}

/// Runs a task list under one policy
///
/// The scheduler owns no task state. Each call to [`Scheduler::run`] resets
/// the given tasks and replays them from scratch, so one list can be compared
/// across policies. Tasks stay in their input positions; dispatch order lives
/// in the returned timeline.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    policy: Policy,
}

impl Scheduler {
    pub const fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Schedule every task to completion and derive per-task and aggregate
    /// metrics
    pub fn run(&self, tasks: &mut [Task]) -> SimResult<Schedule> {
        self.validate(tasks)?;
        for task in tasks.iter_mut() {
            task.reset();
        }

        let timeline = match self.policy {
            Policy::Fcfs => fcfs::run(tasks),
            Policy::RoundRobin { quantum } => round_robin::run(tasks, quantum),
        };
        let aggregates = Aggregates::from_tasks(tasks)?;

        info!(
            "Scheduled {} tasks under {}: makespan {}",
            aggregates.task_count,
            self.policy.as_str(),
            aggregates.makespan
        );

        Ok(Schedule {
            policy: self.policy,
            timeline,
            aggregates,
        })
    }

    fn validate(&self, tasks: &[Task]) -> SimResult<()> {
        if tasks.is_empty() {
            return Err(SimulationError::EmptyTaskSet);
        }
        if let Policy::RoundRobin { quantum } = self.policy {
            if quantum == 0 {
                return Err(SimulationError::InvalidQuantum { quantum });
            }
        }
        for task in tasks {
            task.validate()?;
        }
        Ok(())
    }
}

/// Output of one run: where every task ran and how the run measured up
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Schedule {
    #[serde(flatten)]
    pub policy: Policy,
    pub timeline: Timeline,
    pub aggregates: Aggregates,
}

impl Schedule {
    pub fn makespan(&self) -> Time {
        self.timeline.makespan()
    }
}

/// Indices of `tasks` sorted by arrival time, input order breaking ties
pub(crate) fn arrival_order(tasks: &[Task]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by_key(|&index| tasks[index].arrival);
    order
}
