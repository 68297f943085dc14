//! Sail Trace CLI
//!
//! Loads dataflow analysis traces and reports on their graph and
//! annotation timeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use sail_trace::commands::{
    execute_export, execute_history, execute_inspect, execute_show, ExportArgs, HistoryArgs,
    InspectArgs, SameKeyJump, ShowArgs,
};
use sail_trace::utils::config::DEFAULT_SUMMARY_ROWS;

/// Sail Trace - dataflow trace inspection
#[derive(Parser, Debug)]
#[command(name = "sail-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a trace and print a summary
    Inspect {
        /// Trace file
        trace: PathBuf,

        /// Number of groups to list
        #[arg(long, default_value_t = DEFAULT_SUMMARY_ROWS)]
        groups: usize,
    },

    /// Write the loaded model as a JSON snapshot
    Export {
        /// Trace file
        trace: PathBuf,

        /// Output path for the snapshot
        #[arg(short, long, default_value = "snapshot.json")]
        output: PathBuf,
    },

    /// Place the timeline cursor and print the current event
    Show {
        /// Trace file
        trace: PathBuf,

        /// Event index
        #[arg(short, long, conflicts_with = "position")]
        index: Option<usize>,

        /// Scrubber position between 0 and 1
        #[arg(short, long)]
        position: Option<f64>,

        /// Then jump to the next event on the same node, edge or global slot
        #[arg(long, conflicts_with = "prev_same")]
        next_same: bool,

        /// Then jump to the previous event on the same node, edge or global slot
        #[arg(long)]
        prev_same: bool,
    },

    /// Print the annotations recorded on a node
    History {
        /// Trace file
        trace: PathBuf,

        /// Qualified node name (group:local)
        #[arg(short, long)]
        node: String,

        /// Last timeline position to consider
        #[arg(long)]
        at: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Inspect { trace, groups } => {
            execute_inspect(InspectArgs {
                trace,
                max_groups: groups,
            })?;
        }

        Commands::Export { trace, output } => {
            execute_export(ExportArgs { trace, output })?;
        }

        Commands::Show {
            trace,
            index,
            position,
            next_same,
            prev_same,
        } => {
            let jump = if next_same {
                Some(SameKeyJump::Next)
            } else if prev_same {
                Some(SameKeyJump::Prev)
            } else {
                None
            };
            execute_show(ShowArgs {
                trace,
                index,
                position,
                jump,
            })?;
        }

        Commands::History { trace, node, at } => {
            execute_history(HistoryArgs { trace, node, at })?;
        }
    }

    Ok(())
}
