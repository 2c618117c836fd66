/*!
 * Metrics
 * Whole-run aggregates derived from completed tasks
 */

use crate::core::errors::SimulationError;
use crate::core::types::{SimResult, Time};
use crate::task::Task;
use serde::{Deserialize, Serialize};

/// Summary statistics for one completed policy run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Aggregates {
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    /// Tasks finished per tick of elapsed schedule time
    pub throughput: f64,
    pub task_count: usize,
    pub makespan: Time,
}

impl Aggregates {
    /// Derive aggregates from a fully scheduled task list
    ///
    /// Every task must carry a completion time; a task that never ran is an
    /// error rather than a silent hole in the averages. Makespan here is the
    /// latest completion, which matches the timeline's last block end for
    /// any run the schedulers produce.
    pub fn from_tasks(tasks: &[Task]) -> SimResult<Self> {
        if tasks.is_empty() {
            return Err(SimulationError::EmptyTaskSet);
        }

        let mut turnaround_total: Time = 0;
        let mut waiting_total: Time = 0;
        let mut makespan: Time = 0;

        for task in tasks {
            let completion = task
                .completion
                .ok_or_else(|| SimulationError::IncompleteTask {
                    id: task.id.clone(),
                })?;
            let turnaround = completion - task.arrival;
            turnaround_total += turnaround;
            waiting_total += turnaround - task.burst;
            makespan = makespan.max(completion);
        }

        let count = tasks.len();
        Ok(Self {
            avg_turnaround: turnaround_total as f64 / count as f64,
            avg_waiting: waiting_total as f64 / count as f64,
            throughput: count as f64 / makespan as f64,
            task_count: count,
            makespan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: &str, arrival: Time, burst: Time, completion: Time) -> Task {
        let mut task = Task::new(id, arrival, burst);
        task.remaining = 0;
        task.complete_at(completion);
        task
    }

    #[test]
    fn test_aggregates_over_three_tasks() {
        let tasks = vec![
            completed("P1", 0, 5, 5),
            completed("P2", 1, 3, 8),
            completed("P3", 2, 8, 16),
        ];
        let aggregates = Aggregates::from_tasks(&tasks).unwrap();

        assert!((aggregates.avg_turnaround - 26.0 / 3.0).abs() < 1e-9);
        assert!((aggregates.avg_waiting - 10.0 / 3.0).abs() < 1e-9);
        assert!((aggregates.throughput - 0.1875).abs() < 1e-9);
        assert_eq!(aggregates.task_count, 3);
        assert_eq!(aggregates.makespan, 16);
    }

    #[test]
    fn test_empty_list_is_an_error() {
        assert_eq!(
            Aggregates::from_tasks(&[]),
            Err(SimulationError::EmptyTaskSet)
        );
    }

    #[test]
    fn test_incomplete_task_is_an_error() {
        let tasks = vec![completed("P1", 0, 2, 2), Task::new("P2", 1, 3)];
        assert_eq!(
            Aggregates::from_tasks(&tasks),
            Err(SimulationError::IncompleteTask { id: "P2".into() })
        );
    }

    #[test]
    fn test_single_task_starting_late() {
        let tasks = vec![completed("P1", 4, 6, 10)];
        let aggregates = Aggregates::from_tasks(&tasks).unwrap();

        assert!((aggregates.avg_turnaround - 6.0).abs() < 1e-9);
        assert!((aggregates.avg_waiting - 0.0).abs() < 1e-9);
        assert_eq!(aggregates.makespan, 10);
        assert!((aggregates.throughput - 0.1).abs() < 1e-9);
    }
}
