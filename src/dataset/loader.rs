//! CSV loader for the cleaned transaction dataset.
//!
//! Reads the file once, validates every row, and returns an immutable
//! [`Dataset`]. Any malformed row fails the whole load.

use super::schema::{RawTransaction, Transaction};
use crate::utils::config::REQUIRED_COLUMNS;
use crate::utils::error::DatasetError;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A loaded, validated dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Where the records came from (file path or a caller-supplied name)
    pub source: PathBuf,
    pub records: Vec<Transaction>,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>, records: Vec<Transaction>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over fraudulent records only
    pub fn fraud_records(&self) -> impl Iterator<Item = &Transaction> {
        self.records.iter().filter(|r| r.fraud)
    }

    pub fn fraud_count(&self) -> usize {
        self.fraud_records().count()
    }

    /// First `n` records, for the overview table
    pub fn head(&self, n: usize) -> &[Transaction] {
        &self.records[..n.min(self.records.len())]
    }
}

/// Load a dataset from a CSV file
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `DatasetError::Io` - file cannot be opened
/// * `DatasetError::MissingColumn` - a required header is absent
/// * `DatasetError::Csv` - malformed CSV
/// * `DatasetError::InvalidRecord` - a row has an unmapped code or bad value
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();

    info!("Loading dataset from: {}", path.display());

    let file = File::open(path)?;
    let dataset = read_dataset(file, path)?;

    info!(
        "Loaded {} records ({} fraudulent)",
        dataset.len(),
        dataset.fraud_count()
    );

    Ok(dataset)
}

/// Read a dataset from any CSV source
///
/// **Public** - used by `load_dataset` and by tests with in-memory input
pub fn read_dataset<R: Read>(
    reader: R,
    source: impl Into<PathBuf>,
) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    ensure_required_columns(reader.headers()?)?;

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawTransaction>().enumerate() {
        // Line 1 is the header
        let line = idx + 2;
        let raw = row?;
        let record = Transaction::try_from(&raw)
            .map_err(|source| DatasetError::InvalidRecord { line, source })?;
        records.push(record);
    }

    debug!("Parsed {} CSV rows", records.len());

    Ok(Dataset::new(source, records))
}

/// Check that every column the loader needs is present
///
/// **Private** - internal validation
fn ensure_required_columns(headers: &csv::StringRecord) -> Result<(), DatasetError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::schema::{Category, Gender};

    const SAMPLE: &str = "\
step,customer,age,gender,merchant,category,amount,fraud
0,1,4,3,30,12,4.55,0
0,2,2,2,30,3,39.68,1
1,3,4,1,18,11,120.00,1
";

    #[test]
    fn test_read_dataset_ignores_extra_columns() {
        let dataset = read_dataset(SAMPLE.as_bytes(), "sample.csv").unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.fraud_count(), 2);
        assert_eq!(dataset.records[1].category, Category::Food);
        assert_eq!(dataset.records[2].gender, Gender::Lgbtq);
        assert_eq!(dataset.source, PathBuf::from("sample.csv"));
    }

    #[test]
    fn test_read_dataset_missing_column() {
        let csv = "category,amount,gender\n3,10.0,2\n";
        let err = read_dataset(csv.as_bytes(), "x").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == "fraud"));
    }

    #[test]
    fn test_read_dataset_reports_line_of_bad_row() {
        let csv = "category,fraud,amount,gender\n3,0,1.0,2\n99,0,1.0,2\n";
        let err = read_dataset(csv.as_bytes(), "x").unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRecord { line: 3, .. }));
    }

    #[test]
    fn test_head_is_clamped() {
        let dataset = read_dataset(SAMPLE.as_bytes(), "sample.csv").unwrap();
        assert_eq!(dataset.head(5).len(), 3);
        assert_eq!(dataset.head(1).len(), 1);
    }
}
