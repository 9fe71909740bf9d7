//! `slotfinder` CLI — find meeting slots every team member can attend.
//!
//! ## Usage
//!
//! ```sh
//! # 60-minute slots from a CSV file (the default length)
//! slotfinder -i availability.csv
//!
//! # 30-minute slots, CSV piped on stdin
//! cat availability.csv | slotfinder -d 30
//!
//! # Coalesce overlapping common windows before slicing, JSON output to a file
//! slotfinder -i availability.csv --merge-overlaps --format json -o slots.json
//!
//! # Show what was skipped and why
//! slotfinder -i availability.csv --log-level debug
//! ```
//!
//! The table needs the columns `member_name`, `day_of_week`, `start_time_24h`
//! and `end_time_24h`.

mod render;

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use slotfinder_core::{OverlapPolicy, ScheduleOptions, SlotLength};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "slotfinder",
    version,
    about = "Find meeting slots when every team member is available"
)]
struct Cli {
    /// Availability CSV file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Meeting length in minutes
    #[arg(short, long, default_value_t = 60, allow_negative_numbers = true)]
    duration: i64,

    /// Merge overlapping common windows so no minute is offered twice
    #[arg(long)]
    merge_overlaps: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Diagnostic verbosity on stderr (error, warn, info, debug, trace)
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    // Reject a bad length before touching the input.
    let length = SlotLength::new(cli.duration).context("Invalid --duration")?;
    let options = ScheduleOptions {
        overlap: if cli.merge_overlaps {
            OverlapPolicy::Merge
        } else {
            OverlapPolicy::Preserve
        },
    };
    debug!(minutes = length.minutes(), overlap = ?options.overlap, "options parsed");

    let availability = match cli.input.as_deref() {
        Some(path) => slotfinder_core::load_availability_csv(path)
            .with_context(|| format!("Failed to load availability from {}", path))?,
        None => slotfinder_core::load_availability_reader(io::stdin().lock())
            .context("Failed to load availability from stdin")?,
    };

    let result = slotfinder_core::schedule_with(&availability, length, &options);

    let rendered = match cli.format {
        OutputFormat::Text => render::text(&result),
        OutputFormat::Json => render::json(&result)?,
    };
    write_output(cli.output.as_deref(), &rendered)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
