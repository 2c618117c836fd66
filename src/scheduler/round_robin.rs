/*!
 * Round Robin
 * Preemptive dispatch with a fixed quantum over a FIFO ready queue
 */

use crate::core::types::Time;
use crate::task::Task;
use crate::timeline::Timeline;
use log::debug;
use std::collections::VecDeque;

/// Run every task to completion, `quantum` ticks per dispatch
///
/// The ready queue holds indices into `tasks` in admission order. A task
/// runs for a full quantum or until it finishes, whichever is shorter.
/// Arrivals at or before the end of a slice are admitted before the
/// preempted task re-enters the queue, so a task arriving exactly when a
/// slice ends is served first. Consecutive slices of the same task are
/// recorded as separate blocks.
pub(super) fn run(tasks: &mut [Task], quantum: Time) -> Timeline {
    debug_assert!(quantum > 0, "quantum must be positive");
    let order = super::arrival_order(tasks);
    let mut timeline = Timeline::new();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(order.len());
    let mut clock = 0;
    let mut admitted = 0;
    let mut completed = 0;

    while completed < tasks.len() {
        admit_arrivals(tasks, &order, &mut admitted, clock, &mut ready);

        let Some(current) = ready.pop_front() else {
            // Nothing is runnable, jump the clock to the next arrival.
            clock = tasks[order[admitted]].arrival;
            continue;
        };

        let task = &mut tasks[current];
        let slice = task.remaining.min(quantum);
        let start = clock;
        clock += slice;
        task.remaining -= slice;
        timeline.record(task.id.clone(), start, clock);
        debug!("RR: {} ran [{start}, {clock})", task.id);

        // Arrivals at the slice boundary go ahead of the preempted task.
        admit_arrivals(tasks, &order, &mut admitted, clock, &mut ready);

        if tasks[current].remaining == 0 {
            tasks[current].complete_at(clock);
            completed += 1;
        } else {
            ready.push_back(current);
        }
    }

    timeline
}

/// Move every task with `arrival <= clock` from the arrival list onto the
/// back of the ready queue
fn admit_arrivals(
    tasks: &[Task],
    order: &[usize],
    admitted: &mut usize,
    clock: Time,
    ready: &mut VecDeque<usize>,
) {
    while *admitted < order.len() && tasks[order[*admitted]].arrival <= clock {
        ready.push_back(order[*admitted]);
        *admitted += 1;
    }
}
