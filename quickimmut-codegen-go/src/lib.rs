//! Go code generator for quickimmut containers.
//!
//! Renders a [`ContainerSpec`](quickimmut_core::ContainerSpec) into Go
//! declarations ready to be appended to a file that already carries its
//! `package` clause.

mod generator;

pub mod ast;
pub mod skeleton;

pub use ast::{DefinedType, Field, Func, Param, Receiver, StructType};
pub use generator::Generator;
pub use quickimmut_codegen::ContainerCodegen;
pub use skeleton::{ListSkeleton, MapSkeleton};
