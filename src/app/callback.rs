//! Shared change callbacks.

use std::fmt;
use std::sync::Arc;

/// A cloneable, thread-safe change listener receiving the proposed value.
pub struct Callback<V> {
    func: Arc<dyn Fn(&V) + Send + Sync>,
}

impl<V> Callback<V> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    pub fn call(&self, value: &V) {
        (self.func)(value);
    }
}

impl<V> Clone for Callback<V> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
        }
    }
}

impl<V> fmt::Debug for Callback<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Shorthand for [`Callback::new`].
pub fn callback<V, F>(func: F) -> Callback<V>
where
    F: Fn(&V) + Send + Sync + 'static,
{
    Callback::new(func)
}
