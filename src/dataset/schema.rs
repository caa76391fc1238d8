//! Transaction record types and the code tables of the cleaned dataset.
//!
//! The cleaned CSV stores merchant categories and genders as integer
//! codes. This module owns the mapping between those codes, the original
//! dataset labels, and the display names used in charts.

use crate::utils::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Merchant category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "es_barsandrestaurants")]
    BarsAndRestaurants,
    #[serde(rename = "es_contents")]
    Contents,
    #[serde(rename = "es_fashion")]
    Fashion,
    #[serde(rename = "es_food")]
    Food,
    #[serde(rename = "es_health")]
    Health,
    #[serde(rename = "es_home")]
    Home,
    #[serde(rename = "es_hotelservices")]
    HotelServices,
    #[serde(rename = "es_hyper")]
    Hyper,
    #[serde(rename = "es_leisure")]
    Leisure,
    #[serde(rename = "es_otherservices")]
    OtherServices,
    #[serde(rename = "es_sportsandtoys")]
    SportsAndToys,
    #[serde(rename = "es_tech")]
    Tech,
    #[serde(rename = "es_transportation")]
    Transportation,
    #[serde(rename = "es_travel")]
    Travel,
    #[serde(rename = "es_wellnessandbeauty")]
    WellnessAndBeauty,
}

impl Category {
    /// All categories in encoded order (index == code)
    pub const ALL: [Category; 15] = [
        Category::BarsAndRestaurants,
        Category::Contents,
        Category::Fashion,
        Category::Food,
        Category::Health,
        Category::Home,
        Category::HotelServices,
        Category::Hyper,
        Category::Leisure,
        Category::OtherServices,
        Category::SportsAndToys,
        Category::Tech,
        Category::Transportation,
        Category::Travel,
        Category::WellnessAndBeauty,
    ];

    /// Integer code used in the cleaned dataset
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Label as it appears in the original (uncleaned) dataset
    pub fn label(self) -> &'static str {
        match self {
            Category::BarsAndRestaurants => "es_barsandrestaurants",
            Category::Contents => "es_contents",
            Category::Fashion => "es_fashion",
            Category::Food => "es_food",
            Category::Health => "es_health",
            Category::Home => "es_home",
            Category::HotelServices => "es_hotelservices",
            Category::Hyper => "es_hyper",
            Category::Leisure => "es_leisure",
            Category::OtherServices => "es_otherservices",
            Category::SportsAndToys => "es_sportsandtoys",
            Category::Tech => "es_tech",
            Category::Transportation => "es_transportation",
            Category::Travel => "es_travel",
            Category::WellnessAndBeauty => "es_wellnessandbeauty",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = RecordError;

    /// Accepts either the integer code or the label.
    /// Single quotes around the value (as in the raw upstream CSV) are stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = strip_quotes(s);

        let by_code = value.parse::<u8>().ok().and_then(Category::from_code);
        by_code
            .or_else(|| Category::from_label(value))
            .ok_or_else(|| RecordError::UnknownCategory(s.to_string()))
    }
}

/// Customer gender, encoded 1..=4 in the cleaned dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "LGBTQ")]
    Lgbtq,
    Female,
    Male,
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Lgbtq, Gender::Female, Gender::Male, Gender::Unspecified];

    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_code(code: u8) -> Option<Self> {
        code.checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize).copied())
    }

    /// Single-letter code from the original dataset
    pub fn letter(self) -> char {
        match self {
            Gender::Lgbtq => 'E',
            Gender::Female => 'F',
            Gender::Male => 'M',
            Gender::Unspecified => 'U',
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Gender::Lgbtq => "LGBTQ",
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Unspecified => "Unspecified",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Gender {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = strip_quotes(s);

        if let Ok(code) = value.parse::<u8>() {
            return Gender::from_code(code).ok_or_else(|| RecordError::UnknownGender(s.to_string()));
        }

        Gender::ALL
            .iter()
            .copied()
            .find(|g| value.len() == 1 && value.starts_with(g.letter()))
            .ok_or_else(|| RecordError::UnknownGender(s.to_string()))
    }
}

/// Parse a binary fraud flag: any number equal to 0 or 1, or `true`/`false`
pub fn parse_fraud_flag(s: &str) -> Result<bool, RecordError> {
    let value = s.trim().to_ascii_lowercase();
    match value.as_str() {
        "true" => return Ok(true),
        "false" => return Ok(false),
        _ => {}
    }

    match value.parse::<f64>() {
        Ok(n) if n == 1.0 => Ok(true),
        Ok(n) if n == 0.0 => Ok(false),
        _ => Err(RecordError::InvalidFraudFlag(s.to_string())),
    }
}

/// Parse a finite, non-negative amount
pub fn parse_amount(s: &str) -> Result<f64, RecordError> {
    match s.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(RecordError::InvalidAmount(s.to_string())),
    }
}

fn strip_quotes(s: &str) -> &str {
    s.trim().trim_matches('\'')
}

/// One CSV row as read, before validation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTransaction {
    pub category: String,
    pub fraud: String,
    pub amount: String,
    pub gender: String,
}

impl RawTransaction {
    pub fn new(
        category: impl Into<String>,
        fraud: impl Into<String>,
        amount: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            fraud: fraud.into(),
            amount: amount.into(),
            gender: gender.into(),
        }
    }
}

/// A validated transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub category: Category,
    pub fraud: bool,
    pub amount: f64,
    pub gender: Gender,
}

impl TryFrom<&RawTransaction> for Transaction {
    type Error = RecordError;

    fn try_from(raw: &RawTransaction) -> Result<Self, Self::Error> {
        Ok(Self {
            category: raw.category.parse()?,
            fraud: parse_fraud_flag(&raw.fraud)?,
            amount: parse_amount(&raw.amount)?,
            gender: raw.gender.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_follow_label_order() {
        for (idx, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.code() as usize, idx);
        }
        assert_eq!(Category::from_code(3), Some(Category::Food));
        assert_eq!(Category::from_code(15), None);
    }

    #[test]
    fn test_category_parse_code_label_and_quoted() {
        assert_eq!("11".parse::<Category>().unwrap(), Category::Tech);
        assert_eq!("es_tech".parse::<Category>().unwrap(), Category::Tech);
        assert_eq!("'es_tech'".parse::<Category>().unwrap(), Category::Tech);
        assert!("unknown_category".parse::<Category>().is_err());
        assert!("-1".parse::<Category>().is_err());
    }

    #[test]
    fn test_gender_codes_and_letters() {
        assert_eq!("1".parse::<Gender>().unwrap(), Gender::Lgbtq);
        assert_eq!("4".parse::<Gender>().unwrap(), Gender::Unspecified);
        assert_eq!("'F'".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(Gender::Male.code(), 3);
        assert!("0".parse::<Gender>().is_err());
        assert!("5".parse::<Gender>().is_err());
        assert!("X".parse::<Gender>().is_err());
    }

    #[test]
    fn test_parse_fraud_flag() {
        assert_eq!(parse_fraud_flag("1"), Ok(true));
        assert_eq!(parse_fraud_flag("false"), Ok(false));
        assert_eq!(parse_fraud_flag("0.0"), Ok(false));
        assert!(parse_fraud_flag("2").is_err());
        assert!(parse_fraud_flag("yes").is_err());
    }

    #[test]
    fn test_parse_fraud_flag_any_numeric_spelling() {
        assert_eq!(parse_fraud_flag("1.00"), Ok(true));
        assert_eq!(parse_fraud_flag("0.000"), Ok(false));
        assert_eq!(parse_fraud_flag(" 1e0 "), Ok(true));
        assert!(parse_fraud_flag("0.5").is_err());
        assert!(parse_fraud_flag("NaN").is_err());
        assert!(parse_fraud_flag("inf").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_negative_and_nan() {
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert!(parse_amount("-1").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_transaction_from_raw() {
        let raw = RawTransaction::new("3", "1", "42.0", "2");
        let tx = Transaction::try_from(&raw).unwrap();
        assert_eq!(tx.category, Category::Food);
        assert!(tx.fraud);
        assert_eq!(tx.amount, 42.0);
        assert_eq!(tx.gender, Gender::Female);
    }
}
