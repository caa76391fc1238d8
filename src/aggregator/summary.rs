//! Everything the charts need, computed in one pass over a dataset.

use super::distribution::{amount_histogram, gender_distribution, AmountHistogram, GenderDistribution};
use super::fraud_rate::{fraud_rate_by_category, CategoryStats};
use crate::dataset::loader::Dataset;
use log::debug;

/// Aggregated view of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub record_count: u64,
    pub fraud_count: u64,
    pub gender: GenderDistribution,
    pub amounts: AmountHistogram,
    pub categories: CategoryStats,
}

impl DashboardData {
    /// Overall fraud rate in percent
    pub fn overall_fraud_rate(&self) -> f64 {
        if self.record_count > 0 {
            (self.fraud_count as f64 / self.record_count as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Aggregate a dataset for rendering
///
/// **Public** - single entry point used by commands
pub fn summarize(dataset: &Dataset) -> DashboardData {
    let records = &dataset.records;

    let data = DashboardData {
        record_count: records.len() as u64,
        fraud_count: dataset.fraud_count() as u64,
        gender: gender_distribution(records),
        amounts: amount_histogram(records),
        categories: fraud_rate_by_category(records),
    };

    debug!(
        "Summarized {} records, overall fraud rate {:.2}%",
        data.record_count,
        data.overall_fraud_rate()
    );

    data
}
