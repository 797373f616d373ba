//! WFQ trace replay CLI.
//!
//! Reads a packet trace (stdin by default), computes the idealized WFQ
//! schedule, and prints one `<start>: <record>` line per packet in dispatch
//! order. Diagnostics go to stderr so stdout stays a pure schedule.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use wfq_rs::sched::Replay;
use wfq_rs::stats::RunStats;

#[derive(Debug, Parser)]
#[command(
    name = "wfq",
    about = "Replay a packet trace through an idealized WFQ scheduler"
)]
struct Args {
    /// Read the trace from this file instead of stdin
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Log a per-flow summary after the run
    #[arg(long)]
    stats: bool,

    /// Write run statistics as JSON to this file
    #[arg(long)]
    stats_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = match &args.trace {
        Some(path) => {
            let file =
                File::open(path).map_err(|err| format!("open {}: {err}", path.display()))?;
            Replay::run(BufReader::new(file), &mut out)?
        }
        None => Replay::run(io::stdin().lock(), &mut out)?,
    };
    out.flush()?;

    if args.stats {
        log_stats(&stats);
    }

    if let Some(path) = &args.stats_json {
        let json = serde_json::to_string_pretty(&stats)?;
        std::fs::write(path, json)
            .map_err(|err| format!("write {}: {err}", path.display()))?;
        info!(path = %path.display(), "wrote run stats");
    }

    Ok(())
}

fn log_stats(stats: &RunStats) {
    for fs in &stats.per_flow {
        info!(
            key = %fs.key,
            priority = fs.priority,
            weight = fs.weight,
            packets = fs.packets,
            bytes = fs.bytes,
            last_finish = fs.last_finish,
            "flow summary"
        );
    }
    info!(
        flows = stats.flows,
        dispatched = stats.dispatched_pkts,
        skipped = stats.skipped_lines,
        total_bytes = stats.total_bytes,
        makespan = stats.makespan,
        "run summary"
    );
}
