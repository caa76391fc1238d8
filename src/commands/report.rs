//! Report command implementation.
//!
//! The report command:
//! 1. Loads the dataset
//! 2. Aggregates fraud statistics
//! 3. Renders charts
//! 4. Writes output files

use super::models::{ReportArgs, ReportOutcome};
use crate::aggregator::summarize;
use crate::charts::{generate_overview, generate_text_summary, render_dashboard};
use crate::dataset::{load_dataset, Dataset};
use crate::output::{to_report, write_report, write_svg};
use crate::utils::config::OVERVIEW_ROWS;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset cannot be read or contains invalid records
/// * File write errors
pub fn execute_report(args: &ReportArgs) -> Result<ReportOutcome> {
    let start_time = Instant::now();

    info!("Starting report for dataset: {}", args.data_path.display());

    info!("Step 1/4: Loading dataset...");
    let dataset = load_dataset(&args.data_path)
        .with_context(|| format!("Failed to load dataset {}", args.data_path.display()))?;

    let outcome = render_report(&dataset, args)?;

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(outcome)
}

/// Aggregate, render and write outputs for an already loaded dataset
///
/// **Public** - shared by the report and dashboard commands
pub fn render_report(dataset: &Dataset, args: &ReportArgs) -> Result<ReportOutcome> {
    info!("Step 2/4: Aggregating {} records...", dataset.len());
    let data = summarize(dataset);

    debug!("Top 3 categories by fraud rate:");
    for (i, (category, stat)) in data.categories.sorted_by_rate().iter().take(3).enumerate() {
        debug!(
            "  {}. {} {:.2}% ({}/{})",
            i + 1,
            category,
            stat.fraud_rate,
            stat.fraud_count,
            stat.total_count
        );
    }

    let mut charts_written = Vec::new();
    let mut charts_skipped = Vec::new();

    if args.render_charts {
        info!("Step 3/4: Rendering charts...");
        for (file_name, chart) in render_dashboard(&data, &args.chart_options) {
            match chart {
                Ok(chart) => {
                    let path = args.output_dir.join(chart.file_name);
                    write_svg(&chart.svg, &path)
                        .with_context(|| format!("Failed to write chart {}", path.display()))?;
                    charts_written.push(path);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", file_name, e);
                    charts_skipped.push(file_name);
                }
            }
        }
    } else {
        info!("Step 3/4: Skipping chart rendering (not requested)");
    }

    info!("Step 4/4: Writing report...");
    let json_path = args.json_path();
    let report = to_report(&data, dataset.source.display().to_string());
    write_report(&report, &json_path).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", json_path.display());
    if !charts_written.is_empty() {
        info!("✓ {} charts written to: {}", charts_written.len(), args.output_dir.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("FRAUD SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Dataset: {}", dataset.source.display());
        println!(
            "\n{}",
            generate_overview(dataset.head(OVERVIEW_ROWS), dataset.len())
        );
        println!("\n{}", generate_text_summary(&data, args.summary_rows));
        println!("{}", "=".repeat(80));
    }

    Ok(ReportOutcome {
        json_path,
        charts_written,
        charts_skipped,
        record_count: data.record_count,
        fraud_count: data.fraud_count,
    })
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.data_path.as_os_str().is_empty() {
        anyhow::bail!("Dataset path cannot be empty");
    }

    if args.render_charts && args.output_dir.as_os_str().is_empty() {
        anyhow::bail!("Output directory cannot be empty");
    }

    let options = &args.chart_options;
    if !(300..=10_000).contains(&options.width) {
        anyhow::bail!("Chart width must be between 300 and 10000 pixels");
    }

    if !(200..=10_000).contains(&options.height) {
        anyhow::bail!("Chart height must be between 200 and 10000 pixels");
    }

    if !(200..=10_000).contains(&options.pie_size) {
        anyhow::bail!("Pie chart size must be between 200 and 10000 pixels");
    }

    if args.summary_rows == 0 {
        anyhow::bail!("summary_rows must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartOptions;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_default_is_valid() {
        assert!(validate_args(&ReportArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_data_path() {
        let args = ReportArgs {
            data_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_width_out_of_range() {
        let args = ReportArgs {
            chart_options: ChartOptions {
                width: 100,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_summary_rows() {
        let args = ReportArgs {
            summary_rows: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_out_dir_without_charts() {
        let args = ReportArgs {
            output_dir: PathBuf::new(),
            render_charts: false,
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }
}
