use thiserror::Error;

/// Result alias for observer registration operations.
pub type Result<T> = std::result::Result<T, ObserveError>;

/// Errors raised by [`ObserverRegistry`](crate::ObserverRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObserveError {
    /// The supplied observer handle no longer points at a live observer.
    ///
    /// Raised synchronously by register/unregister; the registry is left
    /// unchanged.
    #[error("observer handle is dangling (observer already dropped)")]
    DanglingObserver,
}
