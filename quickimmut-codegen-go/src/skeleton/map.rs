//! Map skeleton: carrier, entry, builder, and their constructors.

use quickimmut_codegen::{CodeFragment, ContainerNames, Renderable};
use quickimmut_core::ContainerSpec;

use super::{constructor_receiver, finish_fn};
use crate::ast::{DefinedType, Field, Func, Param, Receiver, StructType};

/// Declarations for an immutable map from `K` to `V`.
#[derive(Debug, Clone)]
pub struct MapSkeleton<'a> {
    spec: &'a ContainerSpec,
    key_type: &'a str,
    names: ContainerNames,
}

impl<'a> MapSkeleton<'a> {
    pub fn new(spec: &'a ContainerSpec, key_type: &'a str) -> Self {
        Self {
            spec,
            key_type,
            names: ContainerNames::derive(spec),
        }
    }

    pub fn names(&self) -> &ContainerNames {
        &self.names
    }

    /// `map[K]V`, with raw type names.
    fn map_type(&self) -> String {
        format!("map[{}]{}", self.key_type, self.spec.value_type())
    }

    fn types(&self) -> Vec<CodeFragment> {
        let carrier = StructType::new(self.names.carrier()).field(Field::new("x", self.map_type()));
        let entry = StructType::new(self.names.entry())
            .field(Field::new("k", self.key_type))
            .field(Field::new("v", self.spec.value_type()));
        let builder = DefinedType::new(self.names.builder(), self.names.carrier());

        [
            carrier.to_fragments(),
            entry.to_fragments(),
            builder.to_fragments(),
        ]
        .concat()
    }

    fn make_fn(&self) -> Func {
        let carrier = self.names.carrier();
        Func::new(self.names.make_fn())
            .maybe_receiver(constructor_receiver(self.spec))
            .param(Param::variadic("ents", self.names.entry()))
            .returns(&carrier)
            .body_line(format!("x := make({}, len(ents))", self.map_type()))
            .body_block("for _, y := range ents {", ["x[y.k] = y.v"])
            .body_line(format!("return {}{{x}}", carrier))
    }

    fn make_entry_fn(&self) -> Func {
        let entry = self.names.entry();
        Func::new(self.names.make_entry_fn())
            .maybe_receiver(constructor_receiver(self.spec))
            .param(Param::new("k", self.key_type))
            .param(Param::new("v", self.spec.value_type()))
            .returns(&entry)
            .body_line(format!("return {}{{k, v}}", entry))
    }

    fn start_fn(&self) -> Func {
        let builder = self.names.builder();
        Func::new(self.names.start_fn())
            .maybe_receiver(constructor_receiver(self.spec))
            .param(Param::new("sizeHint", "int"))
            .returns(&builder)
            .body_line(format!(
                "return {}{{make({}, sizeHint)}}",
                builder,
                self.map_type()
            ))
    }

    fn append_fn(&self) -> Func {
        Func::new("Append")
            .receiver(Receiver::pointer("b", self.names.builder()))
            .param(Param::new("k", self.key_type))
            .param(Param::new("v", self.spec.value_type()))
            .body_line("b.x[k] = v")
    }
}

impl Renderable for MapSkeleton<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let funcs = [
            self.make_fn(),
            self.make_entry_fn(),
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
