//! Terminal summary of aggregated data.

use crate::aggregator::DashboardData;
use crate::dataset::Transaction;
use colored::*;

/// Create a text summary: headline numbers, per-category table, and bars
pub fn generate_text_summary(data: &DashboardData, max_rows: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {}", "FRAUD OVERVIEW".bold()));
    lines.push(format!(
        "  Transactions: {}   Fraudulent: {}   Overall rate: {:.2}%",
        data.record_count,
        data.fraud_count,
        data.overall_fraud_rate()
    ));

    if !data.gender.shares.is_empty() {
        let genders: Vec<String> = data
            .gender
            .shares
            .iter()
            .map(|s| format!("{} {:.1}%", s.gender, s.percentage))
            .collect();
        lines.push(format!("  By gender:    {}", genders.join(" | ")));
    }

    if data.amounts.out_of_range > 0 {
        lines.push(format!(
            "  {}",
            format!("{} fraudulent amounts outside histogram range", data.amounts.out_of_range).yellow()
        ));
    }

    lines.push(String::new());
    lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━┳━━━━━━━━━━━━┳━━━━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:<22} ┃ {:^10} ┃ {:^10} ┃ {:^8} ┃",
        "Category (by rate)", "FRAUD", "TOTAL", "RATE"
    ));
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━┫".to_string());

    let rows = data.categories.sorted_by_rate();
    for (category, stat) in rows.iter().take(max_rows) {
        let rate = format!("{:>7.2}%", stat.fraud_rate);
        let rate = if stat.fraud_rate >= 50.0 {
            rate.red().bold()
        } else if stat.fraud_rate >= 10.0 {
            rate.yellow()
        } else {
            rate.normal()
        };

        lines.push(format!(
            "  ┃ {:<22} ┃ {:>10} ┃ {:>10} ┃ {} ┃",
            category.label(),
            stat.fraud_count,
            stat.total_count,
            rate
        ));
    }

    lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━┻━━━━━━━━━━━━┻━━━━━━━━━━┛".to_string());

    // Rate bars, 50 chars == 100%
    lines.push(String::new());
    for (category, stat) in rows.iter().take(5) {
        let bar = "█".repeat((stat.fraud_rate / 2.0) as usize);
        lines.push(format!(
            "  └─ {:<22} {:50} {:>6.2}%",
            category.label(),
            bar.red(),
            stat.fraud_rate
        ));
    }

    if rows.len() > max_rows {
        lines.push(String::new());
        lines.push(format!("   (Showing top {} of {} categories)", max_rows, rows.len()));
    }

    lines.join("\n")
}

/// Table of the given records with decoded labels
pub fn generate_overview(records: &[Transaction], total: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {}", "DATASET OVERVIEW".bold()));
    lines.push(format!(
        "  {:<3} {:<22} {:<12} {:>12} {:>6}",
        "#", "category", "gender", "amount", "fraud"
    ));

    for (i, record) in records.iter().enumerate() {
        let fraud = if record.fraud { "1".red() } else { "0".normal() };
        lines.push(format!(
            "  {:<3} {:<22} {:<12} {:>12.2} {:>6}",
            i,
            record.category.label(),
            record.gender.display_name(),
            record.amount,
            fraud
        ));
    }

    if records.is_empty() {
        lines.push("  (no records)".to_string());
    } else if total > records.len() {
        lines.push(format!("  ({} of {} records)", records.len(), total));
    }

    lines.join("\n")
}
