//! Aggregation of transactions into chartable statistics.
//!
//! This module transforms loaded transactions into:
//! - Per-category fraud counts and fraud rates
//! - Fraud distribution by gender
//! - Fraud histogram by amount range

pub mod distribution;
pub mod fraud_rate;
pub mod summary;

// Re-export main types and functions
pub use distribution::{
    amount_histogram, gender_distribution, AmountBin, AmountHistogram, GenderDistribution,
    GenderShare,
};
pub use fraud_rate::{aggregate_raw, fraud_rate_by_category, CategoryStat, CategoryStats};
pub use summary::{summarize, DashboardData};
