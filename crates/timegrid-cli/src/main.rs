//! `timegrid` CLI — lay out calendar events from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out a JSON event list (stdin → stdout)
//! cat events.json | timegrid layout
//!
//! # Lay out only the events visible on one day
//! timegrid layout -i events.json --date 2025-10-12
//!
//! # Show the overlap clusters instead of column assignments
//! timegrid clusters -i events.json
//!
//! # Print the display dates for a view
//! timegrid view --kind month --anchor 2025-10-15
//! ```
//!
//! Events are a JSON array of objects with `id`, `title`, `start`, `end`,
//! and `color` fields; timestamps may be RFC 3339 or naive datetimes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};
use timegrid_core::{layout_events, partition_clusters, view_dates, CalendarEvent, ViewKind};

#[derive(Parser)]
#[command(
    name = "timegrid",
    version,
    about = "Overlap layout engine for time-grid calendar views"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute column layout for a JSON event list
    Layout {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Only lay out events visible on this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the overlap clusters as arrays of event ids
    Clusters {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Only consider events visible on this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print the display dates for a calendar view
    View {
        /// View kind: day, week, or month
        #[arg(long)]
        kind: String,
        /// Anchor date (YYYY-MM-DD)
        #[arg(long)]
        anchor: NaiveDate,
    },
}

/// Wire format for one event, timestamps still unparsed.
#[derive(Deserialize)]
struct EventRecord {
    id: String,
    title: String,
    start: String,
    end: String,
    #[serde(default)]
    color: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            input,
            output,
            date,
        } => {
            let events = read_events(input.as_deref(), date)?;
            let layouts = layout_events(&events).context("Failed to lay out events")?;
            let pretty = serde_json::to_string_pretty(&layouts)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Clusters { input, date } => {
            let events = read_events(input.as_deref(), date)?;
            let clusters: Vec<Vec<String>> = partition_clusters(&events)
                .into_iter()
                .map(|cluster| cluster.into_iter().map(|e| e.id).collect())
                .collect();
            let pretty = serde_json::to_string_pretty(&clusters)?;
            write_output(None, &pretty)?;
        }
        Commands::View { kind, anchor } => {
            let kind = parse_view_kind(&kind)?;
            for date in view_dates(kind, anchor) {
                println!("{date}");
            }
        }
    }

    Ok(())
}

fn parse_view_kind(raw: &str) -> Result<ViewKind> {
    match raw {
        "day" => Ok(ViewKind::Day),
        "week" => Ok(ViewKind::Week),
        "month" => Ok(ViewKind::Month),
        other => anyhow::bail!("Unknown view kind: '{}'. Expected day, week, or month", other),
    }
}

/// Read and parse the event list, optionally filtered to one day's window.
fn read_events(path: Option<&str>, date: Option<NaiveDate>) -> Result<Vec<CalendarEvent>> {
    let raw = read_input(path)?;
    let records: Vec<EventRecord> =
        serde_json::from_str(&raw).context("Failed to parse event JSON")?;

    let mut events = Vec::with_capacity(records.len());
    for record in records {
        let event = CalendarEvent::parse(
            record.id,
            record.title,
            &record.start,
            &record.end,
            record.color,
        )
        .context("Failed to parse event timestamps")?;
        events.push(event);
    }

    if let Some(date) = date {
        let window = timegrid_core::DayWindow::of(date);
        events.retain(|e| window.contains(e));
    }

    Ok(events)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
