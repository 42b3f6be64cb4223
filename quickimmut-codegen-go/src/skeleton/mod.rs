//! Fixed declaration skeletons for the two container shapes.
//!
//! Each skeleton is a [`Renderable`](quickimmut_codegen::Renderable) that
//! fills its structure with [`ContainerNames`] and the raw type names.
//! Raw names keep their pointer markers; only identifiers are derived.

mod list;
mod map;

pub use list::ListSkeleton;
pub use map::MapSkeleton;
use quickimmut_codegen::ContainerNames;
use quickimmut_core::ContainerSpec;

use crate::ast::{Func, Receiver};

/// Receiver for constructors and `Start…` functions.
fn constructor_receiver(spec: &ContainerSpec) -> Option<Receiver> {
    spec.attachment().map(Receiver::value)
}

/// `Finish` seals the builder: the carrier is handed out and the builder's
/// collection reference is cleared so it can't mutate what was returned.
fn finish_fn(names: &ContainerNames) -> Func {
    let carrier = names.carrier();
    Func::new("Finish")
        .receiver(Receiver::pointer("b", names.builder()))
        .returns(&carrier)
        .body_line("v := *b")
        .body_line("b.x = nil")
        .body_line(format!("return {}(v)", carrier))
}
