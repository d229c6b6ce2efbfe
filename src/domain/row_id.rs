//! Row identity.
//!
//! Selection is keyed by [`RowId`], never by position, so a row keeps its
//! selected state while filtering and sorting move it around. The identity
//! strategy is chosen explicitly when a table is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Stable identity of a row.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for RowId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for RowId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for RowId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<usize> for RowId {
    fn from(value: usize) -> Self {
        Self(value.to_string())
    }
}

type IdFn<T> = Arc<dyn Fn(&T, usize) -> RowId + Send + Sync>;

/// Strategy deriving a [`RowId`] for each row.
///
/// Prefer [`RowIdentity::from_fn`]. The other strategies exist for data that
/// carries no natural key:
///
/// - [`RowIdentity::structural`] keys a row on its serialized JSON form.
///   Structurally equal rows share one id, so selecting one selects all of
///   them.
/// - [`RowIdentity::index`] keys a row on its position in the data set. Ids
///   survive filtering and sorting but not replacing the data.
pub struct RowIdentity<T> {
    extract: IdFn<T>,
}

impl<T> RowIdentity<T> {
    /// Identity read from the row by a caller-supplied extractor.
    ///
    /// The extractor receives the row and its index in the data set.
    pub fn from_fn<F>(extract: F) -> Self
    where
        F: Fn(&T, usize) -> RowId + Send + Sync + 'static,
    {
        Self {
            extract: Arc::new(extract),
        }
    }

    /// Computes the id of `row` at `index`.
    pub fn id_of(&self, row: &T, index: usize) -> RowId {
        (self.extract)(row, index)
    }
}

impl<T: 'static> RowIdentity<T> {
    /// Identity equal to the row's index in the data set.
    #[must_use]
    pub fn index() -> Self {
        Self::from_fn(|_, index| RowId::from(index))
    }
}

impl<T: Serialize + 'static> RowIdentity<T> {
    /// Identity derived from the row's serialized form.
    ///
    /// Rows that fail to serialize fall back to their index.
    #[must_use]
    pub fn structural() -> Self {
        Self::from_fn(|row: &T, index| {
            serde_json::to_string(row).map_or_else(
                |error| {
                    tracing::debug!(index, %error, "row not serializable, keying by index");
                    RowId::from(index)
                },
                RowId::new,
            )
        })
    }
}

impl<T> Clone for RowIdentity<T> {
    fn clone(&self) -> Self {
        Self {
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<T> fmt::Debug for RowIdentity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowIdentity").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        a: i32,
        b: &'static str,
    }

    #[test]
    fn structural_ids_collide_for_equal_rows() {
        let identity = RowIdentity::<Pair>::structural();
        let first = identity.id_of(&Pair { a: 1, b: "x" }, 0);
        let second = identity.id_of(&Pair { a: 1, b: "x" }, 7);
        let third = identity.id_of(&Pair { a: 2, b: "x" }, 1);
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn extractor_receives_index() {
        let identity = RowIdentity::<&str>::from_fn(|row, index| RowId::new(format!("{row}-{index}")));
        assert_eq!(identity.id_of(&"a", 3).as_str(), "a-3");
        assert_eq!(RowIdentity::<&str>::index().id_of(&"a", 3).as_str(), "3");
    }
}
