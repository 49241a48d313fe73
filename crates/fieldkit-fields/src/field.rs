//! Generic field backend: owned value + owned observer registry.
//!
//! # Invariants
//!
//! 1. `set_value_notify(v, true)` notifies exactly once, with exactly the new
//!    value, after the value is stored.
//! 2. `set_value_notify(v, false)` never notifies.
//! 3. Every setter returns the previous value.
//! 4. The multi-value wrappers only ever read/write the first element; an
//!    empty slice sets the field to `None`.

use std::sync::{Mutex, MutexGuard, Weak};

use fieldkit_observe::{Observable, Observer, ObserverRegistry, Result};

/// The backend every concrete preference field composes.
///
/// Owns a nullable value of type `T` and the observer registry used to
/// announce changes. Value access is internally locked and may come from any
/// thread; observer callbacks run synchronously on the mutating thread.
pub struct FieldCore<T: Clone + 'static> {
    value: Mutex<Option<T>>,
    observers: ObserverRegistry<Option<T>>,
}

impl<T: Clone + 'static> FieldCore<T> {
    /// Create a field with no value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
            observers: ObserverRegistry::new(),
        }
    }

    /// Create a field holding an initial value. No notification is sent.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self {
            value: Mutex::new(Some(value)),
            observers: ObserverRegistry::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.value
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.lock().clone()
    }

    /// Replace the value and notify observers. Returns the previous value.
    pub fn set_value(&self, value: Option<T>) -> Option<T> {
        self.set_value_notify(value, true)
    }

    /// Replace the value, returning the previous one.
    ///
    /// When `notify` is set, every registered observer receives the new value
    /// exactly once, synchronously, after the store.
    pub fn set_value_notify(&self, value: Option<T>, notify: bool) -> Option<T> {
        let old = std::mem::replace(&mut *self.lock(), value.clone());
        if notify {
            self.observers.update(&value);
        }
        old
    }

    /// Multi-value convenience: zero or one element.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.value().into_iter().collect()
    }

    /// Multi-value convenience wrapping [`set_value_notify`](Self::set_value_notify).
    ///
    /// Only the first element is stored; an empty slice sets the field to
    /// `None`. Returns the previous values.
    pub fn set_values(&self, values: &[T], notify: bool) -> Vec<T> {
        let old = self.values();
        self.set_value_notify(values.first().cloned(), notify);
        old
    }

    /// The owned registry, for fields that need to notify directly.
    #[must_use]
    pub fn observers(&self) -> &ObserverRegistry<Option<T>> {
        &self.observers
    }
}

impl<T: Clone + 'static> Default for FieldCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + std::fmt::Debug + 'static> std::fmt::Debug for FieldCore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCore")
            .field("value", &self.value())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Observable<Option<T>> for FieldCore<T> {
    fn register_observer(&self, observer: Weak<dyn Observer<Option<T>>>) -> Result<()> {
        self.observers.register(observer)
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer<Option<T>>>) -> Result<()> {
        self.observers.unregister(observer)
    }
}
