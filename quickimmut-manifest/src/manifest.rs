//! Batch manifest: many container specifications in one TOML file.

use std::{path::Path, str::FromStr};

use quickimmut_core::ContainerSpec;
use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result, error::SourceContext};

/// Root of a batch manifest.
///
/// ```toml
/// exported = false
/// attach = "Grouping"
///
/// [[container]]
/// shape = "map"
/// key = "*Key"
/// value = "Valu"
///
/// [[container]]
/// shape = "list"
/// value = "Wow"
/// attach = ""
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Default export visibility for entries.
    #[serde(default)]
    pub exported: bool,

    /// Default attachment type for entries.
    #[serde(default)]
    pub attach: Option<String>,

    /// Containers, in file order.
    #[serde(default, rename = "container")]
    pub containers: Vec<ContainerEntry>,
}

/// Container shape as written in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Map,
    List,
}

/// One `[[container]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerEntry {
    pub shape: ShapeKind,

    /// Key type; required for maps, rejected for lists.
    #[serde(default)]
    pub key: Option<Spanned<String>>,

    pub value: Spanned<String>,

    /// Overrides the manifest-level `exported`.
    #[serde(default)]
    pub exported: Option<bool>,

    /// Overrides the manifest-level `attach`; `""` means free functions.
    #[serde(default)]
    pub attach: Option<String>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "quickimmut.toml")
    }
}

impl Manifest {
    /// Parse a manifest file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Resolve every entry into a container specification, applying defaults.
    pub fn containers(&self) -> Vec<ContainerSpec> {
        self.containers
            .iter()
            .map(|entry| self.resolve(entry))
            .collect()
    }

    fn resolve(&self, entry: &ContainerEntry) -> ContainerSpec {
        let value = entry.value.get_ref().as_str();
        let spec = match (entry.shape, &entry.key) {
            (ShapeKind::Map, Some(key)) => ContainerSpec::map(key.get_ref().as_str(), value),
            // Validation rejects keyless maps; an empty key degenerates like on the CLI.
            (ShapeKind::Map, None) => ContainerSpec::map("", value),
            (ShapeKind::List, _) => ContainerSpec::list(value),
        };

        let attach = entry
            .attach
            .as_deref()
            .or(self.attach.as_deref())
            .unwrap_or_default();

        spec.exported(entry.exported.unwrap_or(self.exported))
            .attach_to(attach)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Only emptiness is checked; type names are never validated as identifiers.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    for container in &manifest.containers {
        match (container.shape, &container.key) {
            (ShapeKind::Map, None) => {
                return Err(ctx.validation_error_at(
                    "map containers need a key type",
                    container.value.span(),
                ));
            }
            (ShapeKind::Map, Some(key)) if key.get_ref().is_empty() => {
                return Err(ctx.validation_error_at("key type must not be empty", key.span()));
            }
            (ShapeKind::List, Some(key)) => {
                return Err(ctx.validation_error_at(
                    "list containers take no key type",
                    key.span(),
                ));
            }
            _ => {}
        }

        if container.value.get_ref().is_empty() {
            return Err(ctx.validation_error_at(
                "value type must not be empty",
                container.value.span(),
            ));
        }
    }
    Ok(())
}
