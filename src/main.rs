//! Fraud Lens CLI
//!
//! Loads a cleaned transaction dataset and renders fraud charts
//! and a JSON report.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use fraud_lens::charts::ChartOptions;
use fraud_lens::commands::{
    display_mappings, display_schema, display_version, execute_report, run_dashboard,
    validate_args, validate_report_file, ReportArgs,
};
use fraud_lens::utils::config::{DATA_PATH_ENV, DEFAULT_DATA_PATH, DEFAULT_OUTPUT_DIR};

/// Fraud Lens - fraud pattern charts for transaction datasets
#[derive(Parser, Debug)]
#[command(name = "fraud-lens")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by `report` and `dashboard`
#[derive(Args, Debug)]
struct RenderOpts {
    /// Path to the cleaned transaction CSV
    #[arg(short, long, env = DATA_PATH_ENV, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Directory for SVG charts
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Output path for the JSON report (defaults to <out-dir>/report.json)
    #[arg(short, long)]
    json: Option<PathBuf>,

    /// Bar chart width in pixels
    #[arg(long, default_value = "1200")]
    width: usize,

    /// Bar chart height in pixels
    #[arg(long, default_value = "600")]
    height: usize,

    /// Pie chart size in pixels
    #[arg(long, default_value = "800")]
    pie_size: usize,

    /// Only write the JSON report
    #[arg(long)]
    no_charts: bool,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Categories listed in the text summary
    #[arg(long, default_value = "15")]
    summary_rows: usize,
}

impl From<RenderOpts> for ReportArgs {
    fn from(opts: RenderOpts) -> Self {
        ReportArgs {
            data_path: opts.data,
            output_dir: opts.out_dir,
            output_json: opts.json,
            chart_options: ChartOptions {
                width: opts.width,
                height: opts.height,
                pie_size: opts.pie_size,
            },
            render_charts: !opts.no_charts,
            print_summary: opts.summary,
            summary_rows: opts.summary_rows,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the dataset, render charts, and write a JSON report
    Report(RenderOpts),

    /// Render, then rerun on demand from stdin (r / reload / q)
    Dashboard(RenderOpts),

    /// Display gender and category encoding tables
    Mappings,

    /// Validate a report JSON file
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
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report(opts) => {
            let args = ReportArgs::from(opts);
            validate_args(&args)?;
            execute_report(&args)?;
        }

        Commands::Dashboard(opts) => {
            let args = ReportArgs::from(opts);
            validate_args(&args)?;
            let stdin = std::io::stdin();
            run_dashboard(&args, stdin.lock())?;
        }

        Commands::Mappings => {
            display_mappings();
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
