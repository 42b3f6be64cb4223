//! Go type declaration builders.

use quickimmut_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Go struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for `type Name struct { ... }` declarations.
#[derive(Debug, Clone)]
pub struct StructType {
    name: String,
    fields: Vec<Field>,
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        CodeBuilder::go().node(self).build()
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .map(|field| CodeFragment::line(format!("{} {}", field.name, field.ty)))
            .collect()
    }
}

impl Renderable for StructType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("type {} struct{{}}", self.name))];
        }

        vec![CodeFragment::block(
            format!("type {} struct {{", self.name),
            self.fields_to_fragments(),
            Some("}".to_string()),
        )]
    }
}

/// Builder for `type Name Underlying` declarations.
///
/// A defined type shares its underlying type's layout, so converting
/// between the two is a relabeling rather than a copy.
#[derive(Debug, Clone)]
pub struct DefinedType {
    name: String,
    underlying: String,
}

impl DefinedType {
    pub fn new(name: impl Into<String>, underlying: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            underlying: underlying.into(),
        }
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        CodeBuilder::go().node(self).build()
    }
}

impl Renderable for DefinedType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "type {} {}",
            self.name, self.underlying
        ))]
    }
}
