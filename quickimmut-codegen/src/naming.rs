//! Identifier derivation for generated container types.
//!
//! Every generated identifier is built from one stem. For a list of `V` the
//! stem is `V`; for a map from `K` to `V` it is `K` fused with title-cased
//! `V`. Pointer markers are stripped first, then the leading character of the
//! stem follows the export flag.
//!
//! | Spec | Carrier | Entry | Builder | Constructors |
//! |---|---|---|---|---|
//! | map | `{base}Map` | `{base}Entry` | `{base}MapBuilder` | `Make{Base}Map`, `Make{Base}MapEntry`, `Start{Base}Map` |
//! | list | `{base}List` | | `{base}ListBuilder` | `Make{Base}List`, `Start{Base}List` |
//!
//! Verb-prefixed names always use the title-cased stem, so an unexported
//! carrier still gets `Make…`/`Start…` names with an uppercase stem.

use quickimmut_core::{ContainerSpec, Shape, strip_pointer, to_lower_first, to_title_first};

/// The family of identifiers generated for one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerNames {
    base: String,
    title: String,
    suffix: &'static str,
}

impl ContainerNames {
    /// Derive names from a specification.
    pub fn derive(spec: &ContainerSpec) -> Self {
        let stem = match spec.shape() {
            Shape::Map { key_type } => format!(
                "{}{}",
                strip_pointer(key_type),
                to_title_first(strip_pointer(spec.value_type()))
            ),
            Shape::List => strip_pointer(spec.value_type()).to_string(),
        };

        let base = if spec.is_exported() {
            to_title_first(&stem)
        } else {
            to_lower_first(&stem)
        };
        let title = to_title_first(&base);
        let suffix = match spec.shape() {
            Shape::Map { .. } => "Map",
            Shape::List => "List",
        };

        Self {
            base,
            title,
            suffix,
        }
    }

    /// The stem, cased by the export flag (e.g., "keyValu").
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The stem with a title-cased first character (e.g., "KeyValu").
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The carrier type (e.g., "keyValuMap", "valuList").
    pub fn carrier(&self) -> String {
        format!("{}{}", self.base, self.suffix)
    }

    /// The entry type pairing one key and one value (maps only).
    pub fn entry(&self) -> String {
        format!("{}Entry", self.base)
    }

    /// The builder type (e.g., "keyValuMapBuilder").
    pub fn builder(&self) -> String {
        format!("{}{}Builder", self.base, self.suffix)
    }

    /// The constructor taking ready-made values (e.g., "MakeKeyValuMap").
    pub fn make_fn(&self) -> String {
        format!("Make{}{}", self.title, self.suffix)
    }

    /// The per-entry constructor (maps only).
    pub fn make_entry_fn(&self) -> String {
        format!("Make{}{}Entry", self.title, self.suffix)
    }

    /// The function returning an empty builder (e.g., "StartKeyValuMap").
    pub fn start_fn(&self) -> String {
        format!("Start{}{}", self.title, self.suffix)
    }
}
