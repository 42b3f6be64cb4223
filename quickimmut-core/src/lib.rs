//! Core types and utilities for the quickimmut generator.
//!
//! This crate provides the container specification consumed by the
//! generators and the string transforms used to derive identifiers.

mod container;
mod utils;

pub use container::{ContainerSpec, Shape};
// String utilities
pub use utils::{POINTER_MARKER, strip_pointer, to_lower_first, to_title_first};
