//! Domain types for settings persistence.
//!
//! Nothing in here performs I/O.  The store crate depends on these types; they
//! never depend on the store.

/// The reset-to-default capability every settings record provides.
pub mod defaults;

/// Static field descriptors and the selective merge routine.
pub mod fields;

/// Load/save policy enums and the serde-friendly options bundle.
pub mod options;
