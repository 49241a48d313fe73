#![forbid(unsafe_code)]

//! Fieldkit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users.

pub mod prelude {
    pub use fieldkit_dialog as dialog;
    pub use fieldkit_fields as fields;
    pub use fieldkit_log as log;
    pub use fieldkit_observe as observe;
    pub use fieldkit_surface as surface;
}
