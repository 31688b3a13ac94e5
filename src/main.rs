//! Timer Rollup CLI
//!
//! Folds per-transaction timer trees into aggregate reports and merges
//! aggregate reports together.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use timer_rollup::commands::{
    display_schema, display_version, execute_aggregate, execute_merge, validate_aggregate_args,
    validate_merge_args, validate_report_file, AggregateArgs, MergeArgs,
};
use timer_rollup::utils::config::{DEFAULT_REPORT_PATH, DEFAULT_TOP_TIMERS};

/// Timer Rollup - aggregate timer trees across transactions
#[derive(Parser, Debug)]
#[command(name = "timer-rollup")]
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
    /// Incorporate transaction timer trees into a new aggregate
    Aggregate {
        /// Tracer JSON files (one transaction object or an array per file)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output path for the aggregate report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of heaviest timers in the summary
        #[arg(long, default_value_t = DEFAULT_TOP_TIMERS)]
        top: usize,
    },

    /// Merge aggregate reports into one
    Merge {
        /// Aggregate report files, merged in the given order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output path for the merged report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of heaviest timers in the summary
        #[arg(long, default_value_t = DEFAULT_TOP_TIMERS)]
        top: usize,
    },

    /// Validate an aggregate report file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Aggregate {
            input,
            output,
            summary,
            top,
        } => {
            let args = AggregateArgs {
                inputs: input,
                output_json: output,
                print_summary: summary,
                top_timers: top,
            };

            validate_aggregate_args(&args)?;
            execute_aggregate(args)?;
        }

        Commands::Merge {
            input,
            output,
            summary,
            top,
        } => {
            let args = MergeArgs {
                inputs: input,
                output_json: output,
                print_summary: summary,
                top_timers: top,
            };

            validate_merge_args(&args)?;
            execute_merge(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
