/*!
 * Schedsim CLI
 * Parses a task set, runs it under the chosen policy, and prints the
 * results table, Gantt chart, and aggregates as text or JSON
 */

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use schedsim::{render, Policy, ReplayCursor, Scheduler, Task, Tick, Time, DEFAULT_QUANTUM};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "schedsim", version, about = "CPU scheduling simulator")]
struct Args {
    /// Task descriptor, repeatable
    #[arg(short = 't', long = "task", value_name = "ID,ARRIVAL,BURST")]
    task: Vec<String>,

    /// File with one ID,ARRIVAL,BURST per line, or a JSON array of tasks
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Add the built-in three-task example
    #[arg(long)]
    demo: bool,

    /// Dispatch policy: fcfs or round_robin
    #[arg(short = 'p', long, default_value = "fcfs")]
    policy: String,

    /// Ticks per slice under round robin
    #[arg(short = 'q', long, default_value_t = DEFAULT_QUANTUM)]
    quantum: Time,

    /// Emit the run as pretty-printed JSON instead of text
    #[arg(long)]
    json: bool,

    /// Append a tick-by-tick trace of the run
    #[arg(long)]
    replay: bool,

    /// Gantt chart width in cells
    #[arg(long, default_value_t = 60)]
    width: usize,
}

fn main() -> miette::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut tasks = Vec::new();
    if let Some(path) = &args.input {
        tasks.extend(read_tasks(path)?);
    }
    for line in &args.task {
        tasks.push(parse_task(line)?);
    }
    if args.demo {
        tasks.extend(demo_tasks());
    }
    if tasks.is_empty() {
        miette::bail!("no tasks given; use --task, --input, or --demo");
    }

    let mut policy: Policy = args
        .policy
        .parse()
        .map_err(|message: String| miette::miette!("{message}"))?;
    if let Policy::RoundRobin { .. } = policy {
        policy = Policy::round_robin(args.quantum);
    }

    let schedule = Scheduler::new(policy).run(&mut tasks)?;

    if args.json {
        let mut value = serde_json::to_value(&schedule).into_diagnostic()?;
        value["tasks"] = serde_json::to_value(&tasks).into_diagnostic()?;
        if args.replay {
            let ticks: Vec<Tick> = ReplayCursor::new(&schedule.timeline).collect();
            value["replay"] = serde_json::to_value(ticks).into_diagnostic()?;
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&value).into_diagnostic()?
        );
        return Ok(());
    }

    println!("{}", render::results_table(&tasks));
    println!();
    println!("{}", render::gantt_chart(&schedule.timeline, args.width));
    println!();
    println!("{}", render::summary(&schedule.aggregates));

    if args.replay {
        println!();
        for tick in ReplayCursor::new(&schedule.timeline) {
            match tick.running {
                Some(id) => println!("t={:<4} {id}", tick.at),
                None => println!("t={:<4} (idle)", tick.at),
            }
        }
    }

    Ok(())
}

/// Parse one `ID,ARRIVAL,BURST` descriptor
fn parse_task(line: &str) -> miette::Result<Task> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [id, arrival, burst] = fields.as_slice() else {
        miette::bail!("expected ID,ARRIVAL,BURST, got '{line}'");
    };
    if id.is_empty() {
        miette::bail!("empty task id in '{line}'");
    }
    let arrival: Time = arrival
        .parse()
        .into_diagnostic()
        .wrap_err_with(|| format!("bad arrival in '{line}'"))?;
    let burst: Time = burst
        .parse()
        .into_diagnostic()
        .wrap_err_with(|| format!("bad burst in '{line}'"))?;
    Ok(Task::new(*id, arrival, burst))
}

/// Load tasks from a JSON array or a line-per-task text file
///
/// Text files may contain blank lines and `#` comments.
fn read_tasks(path: &Path) -> miette::Result<Vec<Task>> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        return serde_json::from_str(&content)
            .into_diagnostic()
            .wrap_err_with(|| format!("invalid task JSON in {}", path.display()));
    }

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_task)
        .collect()
}

fn demo_tasks() -> Vec<Task> {
    vec![
        Task::new("P1", 0, 5),
        Task::new("P2", 1, 3),
        Task::new("P3", 2, 8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_line() {
        assert_eq!(parse_task("P1, 0, 5").unwrap(), Task::new("P1", 0, 5));
        assert_eq!(parse_task("io,3,12").unwrap(), Task::new("io", 3, 12));
    }

    #[test]
    fn test_parse_task_rejects_bad_lines() {
        assert!(parse_task("P1,0").is_err());
        assert!(parse_task("P1,0,5,9").is_err());
        assert!(parse_task(",0,5").is_err());
        assert!(parse_task("P1,zero,5").is_err());
        assert!(parse_task("P1,0,-5").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["schedsim", "--demo"]);
        assert!(args.demo);
        assert_eq!(args.policy, "fcfs");
        assert_eq!(args.quantum, DEFAULT_QUANTUM);
        assert_eq!(args.width, 60);
        assert!(!args.json);
    }

    #[test]
    fn test_quantum_flag_feeds_round_robin() {
        let args = Args::parse_from(["schedsim", "--demo", "-p", "rr", "-q", "4"]);
        let mut policy: Policy = args.policy.parse().unwrap();
        if let Policy::RoundRobin { .. } = policy {
            policy = Policy::round_robin(args.quantum);
        }
        assert_eq!(policy, Policy::round_robin(4));
    }
}
