#![forbid(unsafe_code)]

//! Preference field value containers.
//!
//! A preference field pairs a typed, nullable value with the observer
//! capability from `fieldkit-observe`. The host application wires a field to
//! whatever input widget its toolkit provides; the field owns the value and
//! the change notification, nothing else.
//!
//! - [`FieldCore`]: the generic backend every concrete field composes —
//!   owned `Option<T>` value plus an owned observer registry.
//! - [`TextField`]: a labeled free-text field.
//! - [`PathField`]: a labeled file or directory picker with an injected
//!   chooser callback standing in for the toolkit's native dialog.
//!
//! Construction is single-phase: a field is fully usable the moment its
//! constructor returns. There is no separate create/label/listen protocol for
//! callers to sequence.

pub mod field;
pub mod line;
pub mod path;
pub mod text;

pub use field::FieldCore;
pub use path::{ChooseRequest, FileFilter, PathField, PathKind};
pub use text::TextField;
