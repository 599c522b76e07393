//! Purchase Stats CLI
//!
//! Reads a JSON file (or URL) of retail purchases and prints total spend,
//! average, maximum and median purchase value, and the number of unique
//! products purchased.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use purchase_stats::aggregator::DedupPolicy;
use purchase_stats::commands::{
    display_schema, display_version, execute_summarize, validate_args, validate_input,
    validate_purchase_input, SummarizeArgs,
};
use purchase_stats::output::OutputFormat;
use purchase_stats::utils::config::{DEFAULT_INPUT_FILE, ENV_DEDUP, ENV_FORMAT, ENV_INPUT};

/// Purchase Stats - summary statistics for retail purchase data
#[derive(Parser, Debug)]
#[command(name = "purchase-stats")]
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
    /// Compute summary statistics for a purchase file
    Summarize {
        /// Purchase JSON file or http(s) URL
        #[arg(short, long, env = ENV_INPUT, default_value = DEFAULT_INPUT_FILE)]
        input: String,

        /// How repeated purchase ids are folded into per-purchase totals
        #[arg(long, env = ENV_DEDUP, value_enum, default_value_t = DedupPolicy::FirstWins)]
        dedup: DedupPolicy,

        /// Report layout
        #[arg(short, long, env = ENV_FORMAT, value_enum, default_value_t = OutputFormat::Currency)]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a purchase file without computing statistics
    Validate {
        /// Purchase JSON file or http(s) URL
        #[arg(short, long, env = ENV_INPUT, default_value = DEFAULT_INPUT_FILE)]
        input: String,
    },

    /// Display input schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Summarize {
            input,
            dedup,
            format,
            output,
        } => {
            let args = SummarizeArgs {
                input,
                dedup,
                format,
                output,
            };

            // Validate args first
            validate_args(&args)?;

            execute_summarize(args)?;
        }

        Commands::Validate { input } => {
            validate_input(&input)?;
            validate_purchase_input(&input)?;
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
