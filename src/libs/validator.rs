//! Field validation for task records.
//!
//! Both validators accept an empty or absent value as "no value": a task may
//! have no due date and no priority. The boolean forms never fail; the
//! `parse_*`/`normalize_*` forms return a [`ValidationError`] for callers that
//! want to know why a value was refused.
//!
//! ## Date format
//!
//! A due date is exactly `YYYY-MM-DD` (zero-padded, ten characters) and must
//! name a real calendar day, so `2023-02-30` and `2024-04-31` are refused while
//! `2024-02-29` is accepted. Years start at
//! `0001`. The fixed width keeps lexicographic order equal to
//! chronological order, which the query engine relies on.

use super::task::Priority;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid priority '{0}', expected high, medium or low")]
    InvalidPriority(String),
}

/// Parses a non-empty `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    if !has_date_shape(s) {
        return Err(ValidationError::InvalidDate(s.to_string()));
    }
    match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        // Year 0 is proleptic and not a real calendar year
        Ok(date) if date.year() >= 1 => Ok(date),
        _ => Err(ValidationError::InvalidDate(s.to_string())),
    }
}

/// Returns `true` for an empty string or a real `YYYY-MM-DD` date.
pub fn is_valid_date(s: &str) -> bool {
    s.is_empty() || parse_date(s).is_ok()
}

/// Returns `true` for an empty string or, ignoring case, one of `high`, `medium`, `low`.
pub fn is_valid_priority(s: &str) -> bool {
    s.is_empty() || s.parse::<Priority>().is_ok()
}

/// Resolves a raw priority string into its enumerated value.
///
/// `Ok(None)` means "no priority" (empty input).
pub fn normalize_priority(s: &str) -> Result<Option<Priority>, ValidationError> {
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<Priority>().map(Some)
}

/// Resolves a raw date string into the stored form.
///
/// `Ok(None)` means "no date" (empty input).
pub fn normalize_date(s: &str) -> Result<Option<String>, ValidationError> {
    if s.is_empty() {
        return Ok(None);
    }
    parse_date(s).map(|_| Some(s.to_string()))
}

/// Trims a description, refusing one that is empty afterwards.
pub fn normalize_description(s: &str) -> Result<String, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

// chrono alone accepts unpadded fields such as `2024-1-5`
fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
