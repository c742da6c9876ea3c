use chrono::NaiveDate;

use crate::clock::{EventTime, HmmTime, ScalarError};

/// Parsing strategy for a leaf field, selected by the field's type.
pub trait Scalar: Sized {
    fn from_text(text: &str) -> Result<Self, ScalarError>;
}

fn number<T: std::str::FromStr + Default>(text: &str, expected: &'static str) -> Result<T, ScalarError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse().map_err(|_| ScalarError::new(text, expected))
}

impl Scalar for i32 {
    fn from_text(text: &str) -> Result<Self, ScalarError> {
        number(text, "signed integer")
    }
}

impl Scalar for u32 {
    fn from_text(text: &str) -> Result<Self, ScalarError> {
        number(text, "unsigned integer")
    }
}

impl Scalar for u64 {
    fn from_text(text: &str) -> Result<Self, ScalarError> {
        number(text, "unsigned integer")
    }
}

impl Scalar for f64 {
    fn from_text(text: &str) -> Result<Self, ScalarError> {
        number(text, "number")
    }
}

impl Scalar for String {
    fn from_text(text: &str) -> Result<Self, ScalarError> {
        Ok(text.to_owned())
    }
}

impl Scalar for NaiveDate {
    fn from_text(text: &str) -> Result<Self, ScalarError> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|_| ScalarError::new(text, "YYYY-MM-DD date"))
    }
}

impl Scalar for EventTime {
    fn from_text(text: &str) -> Result<Self, ScalarError> {
        text.parse()
    }
}

impl Scalar for HmmTime {
    fn from_text(text: &str) -> Result<Self, ScalarError> {
        text.parse()
    }
}
