use crate::dataset::{Category, Gender};
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Transactions: {}", report.record_count);
    println!("  Fraudulent: {}", report.fraud_count);
    println!("  Categories: {}", report.category_stats.len());

    Ok(())
}

/// Gender and category encoding tables
pub fn mapping_tables() -> String {
    let mut out = String::new();

    out.push_str("Gender Mapping Table\n");
    out.push_str(&format!("  {:<16} {:<14} {}\n", "Original Gender", "Encoded Value", "Label"));
    for gender in Gender::ALL {
        out.push_str(&format!(
            "  {:<16} {:<14} {}\n",
            gender.letter(),
            gender.code(),
            gender.display_name()
        ));
    }

    out.push('\n');
    out.push_str("Category Mapping Table\n");
    out.push_str(&format!("  {:<24} {}\n", "Original Category", "Encoded Value"));
    for category in Category::ALL {
        out.push_str(&format!("  {:<24} {}\n", category.label(), category.code()));
    }

    out
}

/// Display gender and category encoding tables
pub fn display_mappings() {
    print!("{}", mapping_tables());
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Fraud Lens Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string             - Schema version (e.g., '1.0.0')");
        println!("  source: string              - Dataset path");
        println!("  generated_at: string        - ISO 8601 timestamp");
        println!("  record_count: number        - Transactions loaded");
        println!("  fraud_count: number         - Fraudulent transactions");
        println!("  overall_fraud_rate: number  - Percentage fraudulent");
        println!("  gender_distribution: object - Fraud by gender");
        println!("    total: number             - Fraudulent transactions counted");
        println!("    shares: array             - gender, count, percentage");
        println!("  amount_histogram: object    - Fraud by amount range");
        println!("    bins: array               - label, lower, upper, count");
        println!("    out_of_range: number      - Amounts outside all bins");
        println!("  category_stats: array       - Per-category statistics");
        println!("    category: string          - Category label");
        println!("    fraud_count: number       - Fraudulent transactions");
        println!("    total_count: number       - All transactions");
        println!("    fraud_rate: number        - fraud_count / total_count * 100");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Fraud Lens v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Fraud pattern charts for cleaned transaction datasets.");
}
