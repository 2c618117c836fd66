/*!
 * First-Come-First-Served
 * Non-preemptive dispatch in arrival order, ties kept in input order
 */

use crate::task::Task;
use crate::timeline::Timeline;
use log::debug;

/// Run every task to completion in arrival order
///
/// The processor idles whenever the next task in line has not arrived yet;
/// the clock jumps forward to its arrival and the gap shows up as a hole
/// between consecutive timeline blocks.
pub(super) fn run(tasks: &mut [Task]) -> Timeline {
    let order = super::arrival_order(tasks);
    let mut timeline = Timeline::new();
    let mut clock = 0;

    for &index in &order {
        let task = &mut tasks[index];
        if clock < task.arrival {
            clock = task.arrival;
        }

        let start = clock;
        clock += task.burst;
        timeline.record(task.id.clone(), start, clock);
        debug!("FCFS: {} ran [{start}, {clock})", task.id);

        task.remaining = 0;
        task.complete_at(clock);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_in_arrival_order() {
        let mut tasks = vec![
            Task::new("P2", 4, 2),
            Task::new("P1", 0, 3),
            Task::new("P3", 5, 1),
        ];
        let timeline = run(&mut tasks);

        let order: Vec<&str> = timeline.iter().map(|block| block.task.as_str()).collect();
        assert_eq!(order, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_arrival_tie_keeps_input_order() {
        let mut tasks = vec![
            Task::new("A", 2, 1),
            Task::new("B", 2, 1),
            Task::new("C", 0, 1),
        ];
        let timeline = run(&mut tasks);

        let order: Vec<&str> = timeline.iter().map(|block| block.task.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_idle_gap_advances_clock() {
        let mut tasks = vec![Task::new("P1", 0, 2), Task::new("P2", 10, 3)];
        let timeline = run(&mut tasks);

        assert_eq!(timeline.blocks()[1].start, 10);
        assert_eq!(timeline.makespan(), 13);
        assert_eq!(tasks[1].waiting, Some(0));
    }

    #[test]
    fn test_each_task_completes_once() {
        let mut tasks = vec![Task::new("P1", 0, 5), Task::new("P2", 1, 3)];
        run(&mut tasks);

        assert!(tasks.iter().all(Task::is_complete));
        assert_eq!(tasks[0].completion, Some(5));
        assert_eq!(tasks[1].completion, Some(8));
    }
}
