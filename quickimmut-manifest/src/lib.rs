//! TOML batch manifests for the quickimmut generator.
//!
//! A manifest lists many containers so one invocation can emit them all.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{ContainerEntry, Manifest, ShapeKind, parse_manifest};
