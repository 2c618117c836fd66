/*!
 * Timeline
 * Ordered record of which task held the processor over which interval
 */

use crate::core::types::{TaskId, Time};
use serde::Serialize;

/// Half-open interval `[start, end)` during which one task ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExecutionBlock {
    pub task: TaskId,
    pub start: Time,
    pub end: Time,
}

impl ExecutionBlock {
    pub(crate) fn new(task: TaskId, start: Time, end: Time) -> Self {
        debug_assert!(start < end, "empty execution block");
        Self { task, start, end }
    }

    /// Ticks of processor time the block covers
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Execution history of one policy run
///
/// Blocks are appended in dispatch order, so starts are non-decreasing and
/// each block begins at or after the previous block's end. Gaps between
/// consecutive blocks are idle time; the timeline stores no explicit idle
/// markers, consumers derive gaps from the block boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    blocks: Vec<ExecutionBlock>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next dispatch interval
    pub(crate) fn record(&mut self, task: TaskId, start: Time, end: Time) {
        debug_assert!(
            self.blocks.last().map_or(true, |last| last.end <= start),
            "blocks recorded out of order"
        );
        self.blocks.push(ExecutionBlock::new(task, start, end));
    }

    pub fn blocks(&self) -> &[ExecutionBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionBlock> {
        self.blocks.iter()
    }

    /// Instant the last block ends, 0 for an empty timeline
    pub fn makespan(&self) -> Time {
        self.blocks.last().map_or(0, |block| block.end)
    }

    /// Total ticks spent running tasks, excluding idle gaps
    pub fn busy_time(&self) -> Time {
        self.blocks.iter().map(ExecutionBlock::duration).sum()
    }

    /// Total ticks one task spent running, summed over all its blocks
    pub fn task_time(&self, id: &str) -> Time {
        self.blocks
            .iter()
            .filter(|block| block.task == id)
            .map(ExecutionBlock::duration)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionBlock;
    type IntoIter = std::slice::Iter<'a, ExecutionBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
