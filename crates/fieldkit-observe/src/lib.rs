#![forbid(unsafe_code)]

//! Observer/observable backend for fieldkit front-end types.
//!
//! This crate provides the one reusable boundary contract of the workspace:
//!
//! - [`Observer`]: a callback receiver for value-change notifications, plus
//!   the [`FnObserver`] closure adapter.
//! - [`ObserverRegistry`]: the backend a front-end type owns. It maps
//!   observer identity to a [`Weak`](std::sync::Weak) handle and knows how to
//!   notify everyone currently registered.
//! - [`Observable`]: the two-method capability (register/unregister) that
//!   front-end types expose by delegating to their owned registry.
//!
//! # Architecture
//!
//! Notification logic is composed into front-end types, never inherited:
//! a type owns an `ObserverRegistry`, implements `Observable` by delegation,
//! and calls [`ObserverRegistry::update`] when its value changes.
//!
//! Observers are stored as `Weak` handles and cleaned up lazily during
//! notification, so a dropped observer never keeps receiving updates and
//! never leaks a registry slot.
//!
//! # Invariants
//!
//! 1. Registry keys are unique per observer allocation; re-registering the
//!    same observer is idempotent.
//! 2. `update` delivers to exactly the currently registered live observers,
//!    each exactly once, in unspecified order.
//! 3. Register/unregister with a dangling handle fail without mutating the
//!    registry.
//! 4. Callbacks run outside the registry lock; registration changes made by
//!    a callback take effect for the *next* notification pass.

pub mod error;
pub mod registry;

pub use error::{ObserveError, Result};
pub use registry::{FnObserver, Observable, Observer, ObserverRegistry};
