//! Configuration and constants for the CLI.

/// Dataset location used when neither `--data` nor the env var is set
pub const DEFAULT_DATA_PATH: &str = "cleaned_data.csv";

/// Environment variable overriding the dataset location
pub const DATA_PATH_ENV: &str = "FRAUD_LENS_DATA";

/// Default directory for rendered charts
pub const DEFAULT_OUTPUT_DIR: &str = "charts";

/// Rows shown in the dataset overview
pub const OVERVIEW_ROWS: usize = 5;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Columns the loader needs; anything else in the CSV is ignored
pub const REQUIRED_COLUMNS: &[&str] = &["category", "fraud", "amount", "gender"];

// Amount histogram bins, left-closed and right-open like the dashboard's pd.cut(right=False)
pub const AMOUNT_BIN_EDGES: &[f64] = &[
    0.0, 50.0, 100.0, 200.0, 500.0, 1_000.0, 2_000.0, 5_000.0, 10_000.0, 20_000.0, 50_000.0,
    100_000.0,
];

// Chart geometry
pub const DEFAULT_CHART_WIDTH: usize = 1200;
pub const DEFAULT_CHART_HEIGHT: usize = 600;
pub const PIE_CHART_SIZE: usize = 800;

// Palettes
pub const PIE_PALETTE: &[&str] = &["#ff9999", "#66b3ff", "#99ff99", "#ffcc99"];
pub const HISTOGRAM_COLOR: &str = "orange";
pub const VIRIDIS_PALETTE: &[&str] = &[
    "#440154", "#481a6c", "#472f7d", "#414487", "#39568c", "#31688e", "#2a788e", "#23888e",
    "#1f988b", "#22a884", "#35b779", "#54c568", "#7ad151", "#a5db36", "#d2e21b",
];

/// File names for the charts written by `report`
pub const GENDER_CHART_FILE: &str = "fraud_by_gender.svg";
pub const AMOUNT_CHART_FILE: &str = "fraud_by_amount.svg";
pub const CATEGORY_FRAUD_CHART_FILE: &str = "fraud_by_category.svg";
pub const CATEGORY_TOTAL_CHART_FILE: &str = "total_by_category.svg";
pub const CATEGORY_RATE_CHART_FILE: &str = "fraud_rate_by_category.svg";
