//! Identity-keyed observer registry.
//!
//! # Design
//!
//! [`ObserverRegistry`] stores `Weak` observer handles keyed by the pointer
//! identity of their `Arc` allocation. Re-registering the same observer
//! replaces its slot (idempotent); unregistering an absent observer is a
//! successful no-op.
//!
//! [`update`](ObserverRegistry::update) snapshots the live observer set under
//! the lock, prunes entries whose observer has been dropped, then invokes the
//! callbacks with the lock released. A callback may therefore register or
//! unregister observers without deadlocking; such changes are visible to the
//! next pass, not the one in flight.

use std::sync::{Arc, Mutex, Weak};

use ahash::AHashMap;

use crate::error::{ObserveError, Result};

/// Receiver of value-change notifications.
///
/// Implementors are shared via `Arc` and registered with an
/// [`ObserverRegistry`] through a downgraded handle.
pub trait Observer<T>: Send + Sync {
    /// Called synchronously on the notifying thread with the new value.
    fn update(&self, data: &T);
}

/// Closure adapter implementing [`Observer`].
///
/// Lets plain functions observe without a dedicated type:
///
/// ```
/// use std::sync::{Arc, Weak};
/// use fieldkit_observe::{FnObserver, Observer, ObserverRegistry};
///
/// let registry: ObserverRegistry<i32> = ObserverRegistry::new();
/// let obs: Arc<dyn Observer<i32>> = Arc::new(FnObserver::new(|v: &i32| println!("got {v}")));
/// let handle: Weak<dyn Observer<i32>> = Arc::downgrade(&obs);
/// registry.register(handle).unwrap();
/// registry.update(&7);
/// ```
pub struct FnObserver<F>(F);

impl<F> FnObserver<F> {
    /// Wrap a closure as an observer.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T, F> Observer<T> for FnObserver<F>
where
    F: Fn(&T) + Send + Sync,
{
    fn update(&self, data: &T) {
        (self.0)(data)
    }
}

/// The observer-registration capability front-end types expose.
///
/// Any type composing an [`ObserverRegistry`] satisfies this contract for
/// external listeners by delegation.
pub trait Observable<T: 'static> {
    /// Register an observer for change notifications.
    ///
    /// Fails with [`ObserveError::DanglingObserver`] if the handle's observer
    /// has already been dropped. Re-registering is idempotent.
    fn register_observer(&self, observer: Weak<dyn Observer<T>>) -> Result<()>;

    /// Unregister a previously registered observer.
    ///
    /// Fails with [`ObserveError::DanglingObserver`] on a dangling handle;
    /// unregistering an observer that was never registered succeeds.
    fn unregister_observer(&self, observer: &Weak<dyn Observer<T>>) -> Result<()>;
}

/// Backend registry mapping observer identity to a `Weak` handle.
///
/// Front-end types own one of these and delegate their [`Observable`]
/// implementation to it. The registry is internally locked; registration and
/// notification may come from any thread.
pub struct ObserverRegistry<T: 'static> {
    observers: Mutex<AHashMap<usize, Weak<dyn Observer<T>>>>,
}

impl<T: 'static> ObserverRegistry<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(AHashMap::new()),
        }
    }

    /// Observer identity: the thin pointer of the `Arc` allocation.
    fn key(observer: &Weak<dyn Observer<T>>) -> usize {
        Weak::as_ptr(observer).cast::<()>() as usize
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AHashMap<usize, Weak<dyn Observer<T>>>> {
        // A poisoned lock only means a callback panicked mid-update; the map
        // itself is still consistent.
        self.observers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Register an observer. Idempotent for an already registered handle.
    ///
    /// # Errors
    ///
    /// [`ObserveError::DanglingObserver`] if the observer behind the handle
    /// is already dropped; the registry is left unchanged.
    pub fn register(&self, observer: Weak<dyn Observer<T>>) -> Result<()> {
        if observer.strong_count() == 0 {
            return Err(ObserveError::DanglingObserver);
        }
        let key = Self::key(&observer);
        self.lock().insert(key, observer);
        Ok(())
    }

    /// Unregister an observer. Removing an absent observer succeeds.
    ///
    /// # Errors
    ///
    /// [`ObserveError::DanglingObserver`] on a dangling handle; the registry
    /// is left unchanged.
    pub fn unregister(&self, observer: &Weak<dyn Observer<T>>) -> Result<()> {
        if observer.strong_count() == 0 {
            return Err(ObserveError::DanglingObserver);
        }
        self.lock().remove(&Self::key(observer));
        Ok(())
    }

    /// Deliver `data` synchronously to every currently registered observer,
    /// each exactly once, in unspecified order.
    ///
    /// Entries whose observer has been dropped are pruned during the pass.
    /// Callbacks run with the registry lock released, so reentrant
    /// registration changes are safe but only take effect afterwards.
    pub fn update(&self, data: &T) {
        let live: Vec<Arc<dyn Observer<T>>> = {
            let mut map = self.lock();
            map.retain(|_, weak| weak.strong_count() > 0);
            map.values().filter_map(Weak::upgrade).collect()
        };
        for observer in live {
            observer.update(data);
        }
    }

    /// Number of currently registered observers, counting entries whose
    /// observer may already be dropped but not yet pruned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T: 'static> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> std::fmt::Debug for ObserverRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

impl<T: 'static> Observable<T> for ObserverRegistry<T> {
    fn register_observer(&self, observer: Weak<dyn Observer<T>>) -> Result<()> {
        self.register(observer)
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer<T>>) -> Result<()> {
        self.unregister(observer)
    }
}
