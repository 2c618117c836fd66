/*!
 * Render
 * Plain-text views of a run: results table, Gantt chart, summary lines
 */

use crate::core::types::Time;
use crate::scheduler::Aggregates;
use crate::task::Task;
use crate::timeline::Timeline;
use std::fmt::Write;

const COLUMNS: [&str; 6] = ["ID", "Arrival", "Burst", "Completed", "Waiting", "Turnaround"];

/// Per-task results, one row per task in input order
///
/// Result columns show `-` for tasks that have not been scheduled, so the
/// table is also usable on a freshly parsed list.
pub fn results_table(tasks: &[Task]) -> String {
    let rows: Vec<[String; 6]> = tasks
        .iter()
        .map(|task| {
            [
                task.id.clone(),
                task.arrival.to_string(),
                task.burst.to_string(),
                cell(task.completion),
                cell(task.waiting),
                cell(task.turnaround),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(value.len());
        }
    }

    let header = COLUMNS.map(String::from);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(&header, &widths));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn cell(value: Option<Time>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn format_row(row: &[String; 6], widths: &[usize; 6]) -> String {
    let mut line = format!("{:<width$}", row[0], width = widths[0]);
    for index in 1..row.len() {
        let _ = write!(line, "  {:>width$}", row[index], width = widths[index]);
    }
    line
}

/// Two-line Gantt chart: a bar scaled to `width` cells and a marker row
///
/// Each block renders as `|` plus as much of the task id as fits, padded
/// with `-`; idle cells are `.`. Every block is stretched to at least one
/// cell so short slices stay visible even when the scale rounds them away.
/// The marker row labels block starts and the makespan, dropping labels
/// that would collide with an earlier one.
pub fn gantt_chart(timeline: &Timeline, width: usize) -> String {
    let makespan = timeline.makespan();
    if makespan == 0 || width == 0 {
        return String::new();
    }

    let scale = |t: Time| (t as u128 * width as u128 / makespan as u128) as usize;

    let mut bar = vec!['.'; width];
    let mut floor = 0;
    for block in timeline {
        // Never reuse cells of an earlier block, even when the scale rounds
        // two starts onto the same column.
        let start = scale(block.start).max(floor);
        if start >= width {
            break;
        }
        let end = scale(block.end).max(start + 1).min(width);
        floor = end;
        let cells = &mut bar[start..end];
        cells[0] = '|';
        let label: Vec<char> = block.task.chars().take(cells.len() - 1).collect();
        for (cell, ch) in cells[1..].iter_mut().zip(label.iter()) {
            *cell = *ch;
        }
        for cell in cells.iter_mut().skip(1 + label.len()) {
            *cell = '-';
        }
    }

    let mut markers = String::new();
    let mut next_free = 0;
    for block in timeline {
        place_marker(
            &mut markers,
            &mut next_free,
            scale(block.start),
            &block.start.to_string(),
        );
    }
    place_marker(&mut markers, &mut next_free, width, &makespan.to_string());

    let mut chart: String = bar.into_iter().collect();
    chart.push('\n');
    chart.push_str(&markers);
    chart
}

/// Write `text` starting at `column`, or drop it if an earlier label is in
/// the way
fn place_marker(row: &mut String, next_free: &mut usize, column: usize, text: &str) {
    if column < *next_free {
        return;
    }
    while row.chars().count() < column {
        row.push(' ');
    }
    row.push_str(text);
    *next_free = column + text.chars().count() + 1;
}

/// Aggregate figures, one labeled line each
pub fn summary(aggregates: &Aggregates) -> String {
    format!(
        "{:<15} {}\n{:<15} {}\n{:<15} {:.2}\n{:<15} {:.2}\n{:<15} {:.4}",
        "Tasks:",
        aggregates.task_count,
        "Makespan:",
        aggregates.makespan,
        "Avg Turnaround:",
        aggregates.avg_turnaround,
        "Avg Waiting:",
        aggregates.avg_waiting,
        "Throughput:",
        aggregates.throughput,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Policy, Scheduler};

    #[test]
    fn test_table_shows_dashes_before_run() {
        let tasks = vec![Task::new("P1", 0, 5)];
        let table = results_table(&tasks);

        let mut lines = table.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID  Arrival  Burst  Completed  Waiting  Turnaround"
        );
        assert_eq!(
            lines.next().unwrap(),
            "P1        0      5          -        -           -"
        );
    }

    #[test]
    fn test_table_shows_results_after_run() {
        let mut tasks = vec![Task::new("P1", 0, 5), Task::new("P2", 1, 3)];
        Scheduler::new(Policy::Fcfs).run(&mut tasks).unwrap();

        let table = results_table(&tasks);
        assert!(table.lines().nth(2).unwrap().contains('8'));
        assert!(!table.contains('-'));
    }

    #[test]
    fn test_table_widens_for_long_ids() {
        let tasks = vec![Task::new("compile_kernel", 0, 5)];
        let table = results_table(&tasks);
        assert!(table.lines().next().unwrap().starts_with("ID            "));
    }

    #[test]
    fn test_gantt_single_block() {
        let mut timeline = Timeline::new();
        timeline.record("P1".into(), 0, 4);

        assert_eq!(gantt_chart(&timeline, 8), "|P1-----\n0       4");
    }

    #[test]
    fn test_gantt_idle_gap_is_dotted() {
        let mut timeline = Timeline::new();
        timeline.record("P1".into(), 0, 2);
        timeline.record("P2".into(), 4, 6);

        assert_eq!(gantt_chart(&timeline, 6), "|P..|P\n0   4 6");
    }

    #[test]
    fn test_gantt_short_slice_keeps_a_cell() {
        let mut timeline = Timeline::new();
        timeline.record("P1".into(), 0, 1);
        timeline.record("P2".into(), 1, 100);

        let chart = gantt_chart(&timeline, 10);
        assert!(chart.starts_with("||"));
    }

    #[test]
    fn test_gantt_drops_colliding_markers() {
        let mut timeline = Timeline::new();
        timeline.record("P1".into(), 0, 1);
        timeline.record("P2".into(), 1, 10);

        let markers = gantt_chart(&timeline, 10).lines().nth(1).unwrap().to_string();
        // The second block's start label lands on a used column and is dropped.
        assert_eq!(markers, "0         10");
    }

    #[test]
    fn test_gantt_empty_timeline() {
        assert_eq!(gantt_chart(&Timeline::new(), 40), "");
    }

    #[test]
    fn test_summary_formats() {
        let mut tasks = vec![
            Task::new("P1", 0, 5),
            Task::new("P2", 1, 3),
            Task::new("P3", 2, 8),
        ];
        let schedule = Scheduler::new(Policy::Fcfs).run(&mut tasks).unwrap();

        let summary = summary(&schedule.aggregates);
        assert!(summary.contains("Avg Turnaround: 8.67"));
        assert!(summary.contains("Avg Waiting:    3.33"));
        assert!(summary.contains("Throughput:     0.1875"));
        assert!(summary.contains("Makespan:       16"));
    }
}
