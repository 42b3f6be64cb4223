//! List skeleton: carrier, builder, and their constructors.

use quickimmut_codegen::{CodeFragment, ContainerNames, Renderable};
use quickimmut_core::ContainerSpec;

use super::{constructor_receiver, finish_fn};
use crate::ast::{DefinedType, Field, Func, Param, Receiver, StructType};

/// Declarations for an immutable list of `V`.
#[derive(Debug, Clone)]
pub struct ListSkeleton<'a> {
    spec: &'a ContainerSpec,
    names: ContainerNames,
}

impl<'a> ListSkeleton<'a> {
    pub fn new(spec: &'a ContainerSpec) -> Self {
        Self {
            spec,
            names: ContainerNames::derive(spec),
        }
    }

    pub fn names(&self) -> &ContainerNames {
        &self.names
    }

    /// `[]V`, with the raw value type.
    fn slice_type(&self) -> String {
        format!("[]{}", self.spec.value_type())
    }

    fn types(&self) -> Vec<CodeFragment> {
        let carrier =
            StructType::new(self.names.carrier()).field(Field::new("x", self.slice_type()));
        let builder = DefinedType::new(self.names.builder(), self.names.carrier());

        [carrier.to_fragments(), builder.to_fragments()].concat()
    }

    /// Copies the variadic slice: a `Fn(slice...)` call passes the caller's
    /// backing array, which must not stay reachable from the carrier.
    fn make_fn(&self) -> Func {
        let carrier = self.names.carrier();
        Func::new(self.names.make_fn())
            .maybe_receiver(constructor_receiver(self.spec))
            .param(Param::variadic("ents", self.spec.value_type()))
            .returns(&carrier)
            .body_line(format!("x := make({}, len(ents))", self.slice_type()))
            .body_line("copy(x, ents)")
            .body_line(format!("return {}{{x}}", carrier))
    }

    fn start_fn(&self) -> Func {
        let builder = self.names.builder();
        Func::new(self.names.start_fn())
            .maybe_receiver(constructor_receiver(self.spec))
            .param(Param::new("sizeHint", "int"))
            .returns(&builder)
            .body_line(format!(
                "return {}{{make({}, 0, sizeHint)}}",
                builder,
                self.slice_type()
            ))
    }

    fn append_fn(&self) -> Func {
        Func::new("Append")
            .receiver(Receiver::pointer("b", self.names.builder()))
            .param(Param::new("v", self.spec.value_type()))
            .body_line("b.x = append(b.x, v)")
    }
}

impl Renderable for ListSkeleton<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let funcs = [
            self.make_fn(),
            self.start_fn(),
            self.append_fn(),
            finish_fn(&self.names),
        ];

        let mut fragments = vec![CodeFragment::blank()];
        fragments.extend(self.types());
        fragments.push(CodeFragment::blank());
        fragments.extend(funcs.iter().flat_map(|f| f.to_fragments()));
        fragments
    }
}
