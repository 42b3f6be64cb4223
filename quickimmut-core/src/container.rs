//! Container specifications: the single input to the generator.

/// The shape of a generated container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A map from `key_type` to the value type.
    Map { key_type: String },
    /// A list of the value type.
    List,
}

/// Specification of one immutable container type to generate.
///
/// Type names are taken as given: they may carry a leading pointer marker
/// and may start with either case. Nothing checks that they are legal
/// identifiers.
///
/// # Example
///
/// ```
/// use quickimmut_core::ContainerSpec;
///
/// let spec = ContainerSpec::map("Key", "*Valu")
///     .exported(true)
///     .attach_to("GroupingType");
///
/// assert_eq!(spec.key_type(), Some("Key"));
/// assert_eq!(spec.attachment(), Some("GroupingType"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    shape: Shape,
    value_type: String,
    exported: bool,
    attach_to: Option<String>,
}

impl ContainerSpec {
    /// Specify a map from `key_type` to `value_type`.
    pub fn map(key_type: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self::new(
            Shape::Map {
                key_type: key_type.into(),
            },
            value_type,
        )
    }

    /// Specify a list of `value_type`.
    pub fn list(value_type: impl Into<String>) -> Self {
        Self::new(Shape::List, value_type)
    }

    fn new(shape: Shape, value_type: impl Into<String>) -> Self {
        Self {
            shape,
            value_type: value_type.into(),
            exported: false,
            attach_to: None,
        }
    }

    /// Make the carrier types exported symbols.
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Attach constructor functions to `type_name` as methods.
    ///
    /// An empty name means free functions.
    pub fn attach_to(mut self, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        self.attach_to = (!type_name.is_empty()).then_some(type_name);
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The raw key type, for maps.
    pub fn key_type(&self) -> Option<&str> {
        match &self.shape {
            Shape::Map { key_type } => Some(key_type),
            Shape::List => None,
        }
    }

    /// The raw value type.
    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn attachment(&self) -> Option<&str> {
        self.attach_to.as_deref()
    }
}
