//! Language-specific abstractions.
//!
//! - [`ContainerCodegen`] - Main trait for language code generators

mod traits;

pub use traits::ContainerCodegen;
