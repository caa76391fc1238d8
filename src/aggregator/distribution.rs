//! Distributions of fraudulent transactions by gender and amount range.

use crate::dataset::schema::{Gender, Transaction};
use crate::utils::config::AMOUNT_BIN_EDGES;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Share of fraudulent transactions for one gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderShare {
    pub gender: Gender,
    pub count: u64,
    /// Percentage of all fraudulent transactions
    pub percentage: f64,
}

/// Fraudulent transactions per gender
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenderDistribution {
    pub total: u64,
    /// Genders that occur at least once, most frequent first
    pub shares: Vec<GenderShare>,
}

/// Count fraudulent transactions per gender
///
/// **Public** - feeds the gender pie chart
pub fn gender_distribution(records: &[Transaction]) -> GenderDistribution {
    let mut counts = [0u64; Gender::ALL.len()];
    for record in records.iter().filter(|r| r.fraud) {
        counts[(record.gender.code() - 1) as usize] += 1;
    }

    let total: u64 = counts.iter().sum();
    let mut shares: Vec<GenderShare> = Gender::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(gender, count)| GenderShare {
            gender: *gender,
            count,
            percentage: (count as f64 / total as f64) * 100.0,
        })
        .collect();

    // Stable sort: equal counts stay in code order
    shares.sort_by(|a, b| b.count.cmp(&a.count));

    GenderDistribution { total, shares }
}

/// One amount bucket, `[lower, upper)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountBin {
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

impl AmountBin {
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.lower && amount < self.upper
    }
}

/// Histogram of fraudulent transaction amounts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AmountHistogram {
    /// Bins in ascending order
    pub bins: Vec<AmountBin>,
    /// Fraudulent amounts that fall in no bin
    pub out_of_range: u64,
}

impl AmountHistogram {
    /// Empty histogram over the given edges
    pub fn with_edges(edges: &[f64]) -> Self {
        let bins = edges
            .windows(2)
            .map(|w| AmountBin {
                label: format!("{}-{}", w[0], w[1]),
                lower: w[0],
                upper: w[1],
                count: 0,
            })
            .collect();

        Self {
            bins,
            out_of_range: 0,
        }
    }

    /// Add one amount; returns false if it landed in no bin
    pub fn record(&mut self, amount: f64) -> bool {
        match self.bins.iter_mut().find(|bin| bin.contains(amount)) {
            Some(bin) => {
                bin.count += 1;
                true
            }
            None => {
                self.out_of_range += 1;
                false
            }
        }
    }

    pub fn binned_total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Bucket fraudulent transaction amounts into the standard ranges
///
/// **Public** - feeds the amount histogram chart
pub fn amount_histogram(records: &[Transaction]) -> AmountHistogram {
    let mut histogram = AmountHistogram::with_edges(AMOUNT_BIN_EDGES);

    for record in records.iter().filter(|r| r.fraud) {
        if !histogram.record(record.amount) {
            debug!("Amount {} outside histogram range", record.amount);
        }
    }

    if histogram.out_of_range > 0 {
        warn!(
            "{} fraudulent transactions fall outside the histogram range",
            histogram.out_of_range
        );
    }

    histogram
}
