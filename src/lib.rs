//! Fraud Lens
//!
//! Fraud pattern charts for cleaned transaction datasets: per-category
//! fraud rates, fraud by gender, and fraud by amount range.
//!
//! This crate provides the core implementation for the
//! `fraud-lens` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! fraud-lens report --data cleaned_data.csv --out-dir charts --summary
//! ```
//!
//! The aggregation core can also be used directly:
//!
//! ```
//! use fraud_lens::aggregator::aggregate_raw;
//! use fraud_lens::dataset::{Category, RawTransaction};
//!
//! let records = vec![
//!     RawTransaction::new("es_food", "1", "10.0", "2"),
//!     RawTransaction::new("es_food", "0", "12.0", "3"),
//! ];
//! let stats = aggregate_raw(&records).unwrap();
//! assert_eq!(stats.get(Category::Food).unwrap().fraud_rate, 50.0);
//! ```

pub mod aggregator;
pub mod charts;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod utils;
