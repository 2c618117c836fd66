/*!
 * Replay
 * Tick-by-tick walk over a timeline, idle gaps included
 */

use crate::core::serde::is_none;
use crate::core::types::{TaskId, Time};
use crate::timeline::Timeline;
use serde::Serialize;

/// Processor state at one instant: the running task, or idle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Tick {
    pub at: Time,
    #[serde(skip_serializing_if = "is_none")]
    pub running: Option<TaskId>,
}

/// Iterator yielding one [`Tick`] per time unit from 0 to the makespan
///
/// Instants no block covers yield `running: None`, so the cursor exposes the
/// idle gaps the timeline only implies. Relies on blocks being ordered and
/// non-overlapping, which every timeline the schedulers produce satisfies.
#[derive(Debug, Clone)]
pub struct ReplayCursor<'a> {
    timeline: &'a Timeline,
    position: Time,
    block: usize,
}

impl<'a> ReplayCursor<'a> {
    pub fn new(timeline: &'a Timeline) -> Self {
        Self {
            timeline,
            position: 0,
            block: 0,
        }
    }

    /// Next instant the cursor will yield
    pub fn position(&self) -> Time {
        self.position
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.timeline.makespan()
    }
}

impl Iterator for ReplayCursor<'_> {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.is_done() {
            return None;
        }

        let blocks = self.timeline.blocks();
        while self.block < blocks.len() && blocks[self.block].end <= self.position {
            self.block += 1;
        }

        let running = blocks
            .get(self.block)
            .filter(|block| block.start <= self.position)
            .map(|block| block.task.clone());

        let tick = Tick {
            at: self.position,
            running,
        };
        self.position += 1;
        Some(tick)
    }
}
