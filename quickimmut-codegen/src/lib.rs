//! Shared code generation utilities for the quickimmut generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `quickimmut-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Renderable)
//! - [`naming`] - Identifier derivation for container types
//! - [`language`] - Language-specific abstractions (ContainerCodegen)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod language;
pub mod naming;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use language::ContainerCodegen;
pub use naming::ContainerNames;
