//! Sort descriptor types.

use serde::{Deserialize, Serialize};

/// Direction of an applied sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `asc`/`desc` case-insensitively.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// The active sort: a column plus a direction.
///
/// A descriptor whose `direction` is `None` names a column without sorting by
/// it, which is distinct from having no descriptor at all (`Option::None` at
/// the call site). Both leave row order untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub column_id: String,
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl SortDescriptor {
    #[must_use]
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Some(SortDirection::Asc),
        }
    }

    #[must_use]
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Some(SortDirection::Desc),
        }
    }

    /// Returns true when this descriptor actually orders rows.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        self.direction.is_some()
    }

    /// Next descriptor after a header click on `column_id`.
    ///
    /// A different column starts at ascending. The same column cycles
    /// `asc -> desc -> none -> asc`.
    ///
    /// # Example
    ///
    /// ```
    /// use gridline::{SortDescriptor, SortDirection};
    ///
    /// let first = SortDescriptor::cycle(None, "age");
    /// assert_eq!(first.direction, Some(SortDirection::Asc));
    /// let second = SortDescriptor::cycle(Some(&first), "age");
    /// assert_eq!(second.direction, Some(SortDirection::Desc));
    /// let third = SortDescriptor::cycle(Some(&second), "age");
    /// assert_eq!(third.direction, None);
    /// ```
    #[must_use]
    pub fn cycle(current: Option<&Self>, column_id: &str) -> Self {
        let direction = match current {
            Some(current) if current.column_id == column_id => match current.direction {
                Some(SortDirection::Asc) => Some(SortDirection::Desc),
                Some(SortDirection::Desc) => None,
                None => Some(SortDirection::Asc),
            },
            _ => Some(SortDirection::Asc),
        };
        Self {
            column_id: column_id.to_string(),
            direction,
        }
    }
}
