use crate::charts::ChartOptions;
use crate::utils::config::{DEFAULT_DATA_PATH, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

/// File name of the JSON report when no explicit path is given
pub const DEFAULT_REPORT_FILE: &str = "report.json";

/// Arguments for the report and dashboard commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to the cleaned transaction CSV
    pub data_path: PathBuf,

    /// Directory the SVG charts are written to
    pub output_dir: PathBuf,

    /// Output path for the JSON report (None = `<output_dir>/report.json`)
    pub output_json: Option<PathBuf>,

    /// Chart sizes
    pub chart_options: ChartOptions,

    /// Write SVG charts
    pub render_charts: bool,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of categories shown in the text summary
    pub summary_rows: usize,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_json: None,
            chart_options: ChartOptions::default(),
            render_charts: true,
            print_summary: false,
            summary_rows: 15,
        }
    }
}

impl ReportArgs {
    /// Where the JSON report goes
    pub fn json_path(&self) -> PathBuf {
        self.output_json
            .clone()
            .unwrap_or_else(|| self.output_dir.join(DEFAULT_REPORT_FILE))
    }
}

/// What a report run produced
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub json_path: PathBuf,
    pub charts_written: Vec<PathBuf>,
    /// Charts with nothing to plot
    pub charts_skipped: Vec<&'static str>,
    pub record_count: u64,
    pub fraud_count: u64,
}
