//! Per-category fraud counts and fraud rates.
//!
//! For each of the 15 merchant categories this counts all transactions
//! and fraudulent transactions, and derives the fraud rate as a
//! percentage. The computation is pure: same input, same output.

use crate::dataset::schema::{parse_fraud_flag, Category, RawTransaction, Transaction};
use crate::utils::error::AggregateError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fraud statistics for one category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryStat {
    pub fraud_count: u64,
    pub total_count: u64,
    /// fraud_count / total_count * 100, or 0.0 when total_count is 0
    pub fraud_rate: f64,
}

impl CategoryStat {
    pub fn new(fraud_count: u64, total_count: u64) -> Self {
        let fraud_rate = if total_count > 0 {
            (fraud_count as f64 / total_count as f64) * 100.0
        } else {
            0.0
        };

        Self {
            fraud_count,
            total_count,
            fraud_rate,
        }
    }
}

/// Mapping from category to its statistics
///
/// Empty for empty input; otherwise holds every category, including
/// those with no transactions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryStats {
    stats: BTreeMap<Category, CategoryStat>,
}

impl CategoryStats {
    pub fn get(&self, category: Category) -> Option<&CategoryStat> {
        self.stats.get(&category)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterate in category code order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryStat)> {
        self.stats.iter().map(|(c, s)| (*c, s))
    }

    /// Categories ordered by fraud rate, highest first.
    /// Equal rates keep category code order.
    pub fn sorted_by_rate(&self) -> Vec<(Category, CategoryStat)> {
        let mut rows: Vec<_> = self.stats.iter().map(|(c, s)| (*c, *s)).collect();
        rows.sort_by(|a, b| b.1.fraud_rate.total_cmp(&a.1.fraud_rate));
        rows
    }

    /// (fraudulent, total) across all categories
    pub fn totals(&self) -> (u64, u64) {
        self.stats.values().fold((0, 0), |(fraud, total), s| {
            (fraud + s.fraud_count, total + s.total_count)
        })
    }
}

/// Compute fraud statistics from validated transactions
///
/// **Public** - main entry point for loaded datasets
pub fn fraud_rate_by_category(records: &[Transaction]) -> CategoryStats {
    count_by_category(records.iter().map(|r| (r.category, r.fraud)))
}

/// Validate raw records and compute fraud statistics
///
/// **Public** - entry point for unvalidated input
///
/// Only `category` and `fraud` are inspected. Every record is validated
/// before counting, so an error never comes with partial output.
///
/// # Errors
/// * `AggregateError::InvalidRecord` - unknown category or non-binary fraud flag
pub fn aggregate_raw(records: &[RawTransaction]) -> Result<CategoryStats, AggregateError> {
    let pairs = records
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let category = raw
                .category
                .parse::<Category>()
                .map_err(|source| AggregateError::InvalidRecord { index, source })?;
            let fraud = parse_fraud_flag(&raw.fraud)
                .map_err(|source| AggregateError::InvalidRecord { index, source })?;
            Ok((category, fraud))
        })
        .collect::<Result<Vec<_>, AggregateError>>()?;

    Ok(count_by_category(pairs))
}

/// Count (category, fraud) pairs into stats
///
/// **Private** - shared by both entry points
fn count_by_category(pairs: impl IntoIterator<Item = (Category, bool)>) -> CategoryStats {
    let mut fraud = [0u64; Category::ALL.len()];
    let mut total = [0u64; Category::ALL.len()];
    let mut seen = 0usize;

    for (category, is_fraud) in pairs {
        let idx = category.code() as usize;
        total[idx] += 1;
        if is_fraud {
            fraud[idx] += 1;
        }
        seen += 1;
    }

    if seen == 0 {
        debug!("No records to aggregate");
        return CategoryStats::default();
    }

    let stats = Category::ALL
        .iter()
        .map(|c| {
            let idx = c.code() as usize;
            (*c, CategoryStat::new(fraud[idx], total[idx]))
        })
        .collect();

    debug!("Aggregated {} records into {} categories", seen, Category::ALL.len());

    CategoryStats { stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RecordError;

    fn raw(category: &str, fraud: &str) -> RawTransaction {
        RawTransaction::new(category, fraud, "0", "1")
    }

    #[test]
    fn test_example_rates() {
        let input = vec![raw("es_food", "1"), raw("es_food", "0"), raw("es_tech", "1")];
        let stats = aggregate_raw(&input).unwrap();

        assert_eq!(stats.len(), 15);
        assert_eq!(stats.get(Category::Food), Some(&CategoryStat::new(1, 2)));
        assert_eq!(stats.get(Category::Food).unwrap().fraud_rate, 50.0);
        assert_eq!(stats.get(Category::Tech).unwrap().fraud_rate, 100.0);

        let others = stats
            .iter()
            .filter(|(c, _)| *c != Category::Food && *c != Category::Tech);
        for (_, stat) in others {
            assert_eq!(*stat, CategoryStat::default());
        }
    }

    #[test]
    fn test_empty_input_is_empty_mapping() {
        let stats = aggregate_raw(&[]).unwrap();
        assert!(stats.is_empty());
        assert!(fraud_rate_by_category(&[]).is_empty());
    }

    #[test]
    fn test_unknown_category_fails_without_output() {
        let input = vec![raw("es_food", "1"), raw("unknown_category", "0")];
        let err = aggregate_raw(&input).unwrap_err();

        assert_eq!(
            err,
            AggregateError::InvalidRecord {
                index: 1,
                source: RecordError::UnknownCategory("unknown_category".to_string()),
            }
        );
    }

    #[test]
    fn test_non_binary_fraud_flag_fails() {
        let err = aggregate_raw(&[raw("es_food", "maybe")]).unwrap_err();
        assert!(matches!(
            err,
            AggregateError::InvalidRecord {
                index: 0,
                source: RecordError::InvalidFraudFlag(_)
            }
        ));
    }

    #[test]
    fn test_zero_total_rate_is_zero() {
        assert_eq!(CategoryStat::new(0, 0).fraud_rate, 0.0);
    }

    #[test]
    fn test_sorted_by_rate_keeps_code_order_on_ties() {
        let input = vec![raw("0", "1"), raw("1", "1"), raw("2", "0")];
        let sorted = aggregate_raw(&input).unwrap().sorted_by_rate();

        assert_eq!(sorted[0].0, Category::BarsAndRestaurants);
        assert_eq!(sorted[1].0, Category::Contents);
        assert_eq!(sorted[0].1.fraud_rate, 100.0);
    }

    #[test]
    fn test_totals() {
        let input = vec![raw("3", "1"), raw("3", "0"), raw("4", "0")];
        assert_eq!(aggregate_raw(&input).unwrap().totals(), (1, 3));
    }
}
