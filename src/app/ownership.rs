//! Controlled and uncontrolled state ownership.
//!
//! Every state category of a table (filter, sort, pagination, selection,
//! column layout) lives in a [`StateSlot`]. The slot is built once from an
//! [`Ownership`] and from then on decides what happens to a proposed value:
//!
//! ```text
//!                 propose(next)
//!                      │
//!            next == current? ── yes ──→ dropped
//!                      │ no
//!              on_change(&next)
//!                      │
//!     Uncontrolled ────┴──── Controlled
//!     value = next           value unchanged until sync(next)
//! ```
//!
//! A controlled slot only ever shows what the caller syncs back, so a caller
//! that ignores a proposal keeps the old value on screen.

use super::callback::Callback;
use std::fmt;

/// Who owns a category's value.
pub enum Ownership<V> {
    /// The caller owns the value. Proposals go to `on_change` only.
    Controlled { value: V, on_change: Callback<V> },
    /// The table owns the value, starting from `initial`.
    Uncontrolled {
        initial: V,
        on_change: Option<Callback<V>>,
    },
}

impl<V> Ownership<V> {
    pub fn controlled<F>(value: V, on_change: F) -> Self
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        Self::Controlled {
            value,
            on_change: Callback::new(on_change),
        }
    }

    #[must_use]
    pub const fn uncontrolled(initial: V) -> Self {
        Self::Uncontrolled {
            initial,
            on_change: None,
        }
    }

    /// Replaces the change listener, keeping the ownership mode.
    #[must_use]
    pub fn on_change(self, listener: Callback<V>) -> Self {
        match self {
            Self::Controlled { value, .. } => Self::Controlled {
                value,
                on_change: listener,
            },
            Self::Uncontrolled { initial, .. } => Self::Uncontrolled {
                initial,
                on_change: Some(listener),
            },
        }
    }

    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }
}

impl<V: fmt::Debug> fmt::Debug for Ownership<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled { value, .. } => {
                f.debug_struct("Controlled").field("value", value).finish_non_exhaustive()
            }
            Self::Uncontrolled { initial, on_change } => f
                .debug_struct("Uncontrolled")
                .field("initial", initial)
                .field("on_change", &on_change.is_some())
                .finish(),
        }
    }
}

/// Holder for one state category.
#[derive(Debug)]
pub struct StateSlot<V> {
    category: &'static str,
    value: V,
    controlled: bool,
    on_change: Option<Callback<V>>,
}

impl<V: PartialEq + fmt::Debug> StateSlot<V> {
    pub fn new(category: &'static str, ownership: Ownership<V>) -> Self {
        match ownership {
            Ownership::Controlled { value, on_change } => Self {
                category,
                value,
                controlled: true,
                on_change: Some(on_change),
            },
            Ownership::Uncontrolled { initial, on_change } => Self {
                category,
                value: initial,
                controlled: false,
                on_change,
            },
        }
    }

    /// The value rendered this pass.
    pub const fn get(&self) -> &V {
        &self.value
    }

    pub const fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Offers `next` as the new value.
    ///
    /// Returns `false` when `next` equals the current value and nothing was
    /// emitted. Otherwise the listener sees `next`, and an uncontrolled slot
    /// also stores it.
    pub fn propose(&mut self, next: V) -> bool {
        if next == self.value {
            return false;
        }
        tracing::debug!(
            category = self.category,
            controlled = self.controlled,
            value = ?next,
            "state change proposed"
        );
        if let Some(listener) = &self.on_change {
            listener.call(&next);
        }
        if !self.controlled {
            self.value = next;
        }
        true
    }

    /// Accepts the caller's value for a controlled slot.
    ///
    /// Uncontrolled slots own their value and ignore the sync.
    pub fn sync(&mut self, value: V) {
        if !self.controlled {
            tracing::warn!(category = self.category, "sync into uncontrolled state ignored");
            return;
        }
        self.value = value;
    }
}
