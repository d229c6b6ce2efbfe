//! Cell values produced by column accessors.
//!
//! The engine never looks inside a row. Everything it filters and sorts on is a
//! [`CellValue`] returned by a column accessor, which gives each cell a display
//! form, an optional numeric reading, and an optional calendar day.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt;

/// A displayable value extracted from a row by a column accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value. Displays as the empty string.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Numeric reading used by the default comparator.
    ///
    /// Text is trimmed and parsed as a float. `Null`, blank text, dates,
    /// `NaN` and non-finite text such as `"inf"` have no numeric reading.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            Self::Null | Self::Date(_) | Self::DateTime(_) => return None,
            Self::Bool(b) => f64::from(u8::from(*b)),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())?
            }
        };
        (!number.is_nan()).then_some(number)
    }

    /// Calendar day used by date filters.
    ///
    /// Text cells are parsed with [`parse_day`].
    #[must_use]
    pub fn as_day(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(dt) => Some(dt.date()),
            Self::Text(s) => parse_day(s),
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) => None,
        }
    }

    /// Returns true for `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

/// Parses a string into a calendar day.
///
/// Accepted forms, after trimming:
/// - `YYYY-MM-DD`
/// - RFC 3339 (`2024-03-01T10:00:00Z`, `2024-03-01T10:00:00+02:00`); the day is
///   taken in the timestamp's own offset
/// - `YYYY-MM-DDTHH:MM[:SS]` and `YYYY-MM-DD HH:MM[:SS]`
///
/// # Example
///
/// ```
/// use gridline::domain::value::parse_day;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_day("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
/// assert_eq!(parse_day("2024-03-01T23:30:00Z"), NaiveDate::from_ymd_opt(2024, 3, 1));
/// assert_eq!(parse_day("yesterday"), None);
/// ```
#[must_use]
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|dt| dt.date())
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<V: Into<Self>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
