//! Dataset loading and record definitions.
//!
//! This module handles:
//! - Code tables for categories and genders
//! - Validating raw CSV rows into transactions
//! - Loading the CSV file
//! - Caching loaded datasets by source identity

pub mod cache;
pub mod loader;
pub mod schema;

// Re-export main types
pub use cache::{DatasetCache, SourceKey};
pub use loader::{load_dataset, read_dataset, Dataset};
pub use schema::{parse_amount, parse_fraud_flag, Category, Gender, RawTransaction, Transaction};
