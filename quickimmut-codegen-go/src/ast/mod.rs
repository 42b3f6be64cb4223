//! Go AST builders for generating type declarations and functions.
//!
//! These provide a high-level API for constructing Go syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod types;

pub use fns::{Func, Param, Receiver};
pub use types::{DefinedType, Field, StructType};
