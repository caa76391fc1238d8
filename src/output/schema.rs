//! Output JSON schema definitions for dashboard reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{AmountHistogram, CategoryStat, DashboardData, GenderDistribution};
use crate::dataset::schema::Category;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset the report was computed from
    pub source: String,

    /// Timestamp when report was generated (RFC 3339)
    pub generated_at: String,

    pub record_count: u64,
    pub fraud_count: u64,

    /// Fraudulent / total, in percent
    pub overall_fraud_rate: f64,

    pub gender_distribution: GenderDistribution,
    pub amount_histogram: AmountHistogram,

    /// One row per category, in category code order
    pub category_stats: Vec<CategoryRow>,
}

/// Fraud statistics for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: Category,
    #[serde(flatten)]
    pub stat: CategoryStat,
}

/// Build a report from aggregated data
pub fn to_report(data: &DashboardData, source: impl Into<String>) -> Report {
    Report {
        version: SCHEMA_VERSION.to_string(),
        source: source.into(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        record_count: data.record_count,
        fraud_count: data.fraud_count,
        overall_fraud_rate: data.overall_fraud_rate(),
        gender_distribution: data.gender.clone(),
        amount_histogram: data.amounts.clone(),
        category_stats: data
            .categories
            .iter()
            .map(|(category, stat)| CategoryRow {
                category,
                stat: *stat,
            })
            .collect(),
    }
}
