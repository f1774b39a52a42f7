use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_DATE_FORMAT, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "The provided date is not in the correct format: {input:?} (expected {format:?})")]
    InvalidDateFormat { input: String, format: String },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Parses `input` as a calendar day using a chrono `strftime` pattern.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input and
/// `ParseError::InvalidDateFormat` when `input` does not match `format`
/// or names a day that does not exist.
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    NaiveDate::parse_from_str(trimmed, format).map_err(|_| ParseError::InvalidDateFormat {
        input: trimmed.to_owned(),
        format: format.to_owned(),
    })
}

/// A date string together with the format it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInput {
    pub date:   String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl DateInput {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date:   date.into(),
            format: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// The declared format, or [`DEFAULT_DATE_FORMAT`] when none was given.
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    /// # Errors
    /// See [`parse_date`].
    pub fn parse(&self) -> Result<NaiveDate, ParseError> {
        parse_date(&self.date, self.format())
    }
}

impl From<&str> for DateInput {
    fn from(date: &str) -> Self {
        Self::new(date)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.format(DEFAULT_DATE_FORMAT).to_string())
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.date)
    }
}
