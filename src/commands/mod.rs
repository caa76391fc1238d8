//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod dashboard;
pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use dashboard::{render_pass, run_dashboard, DashboardCommand};
pub use models::{ReportArgs, ReportOutcome};
pub use report::{execute_report, render_report, validate_args};
pub use utils::{display_mappings, display_schema, display_version, mapping_tables, validate_report_file};
