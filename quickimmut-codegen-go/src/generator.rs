use quickimmut_codegen::{CodeBuilder, ContainerCodegen};
use quickimmut_core::{ContainerSpec, Shape};
use tracing::debug;

use crate::skeleton::{ListSkeleton, MapSkeleton};

/// Go generator for immutable, builder-backed containers.
///
/// # Example
///
/// ```
/// use quickimmut_codegen_go::{ContainerCodegen, Generator};
/// use quickimmut_core::ContainerSpec;
///
/// let code = Generator::new().render(&ContainerSpec::list("Valu"));
/// assert!(code.contains("type valuList struct {"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }
}

impl ContainerCodegen for Generator {
    fn language(&self) -> &'static str {
        "go"
    }

    fn render(&self, spec: &ContainerSpec) -> String {
        let builder = CodeBuilder::go();
        match spec.shape() {
            Shape::Map { key_type } => {
                let skeleton = MapSkeleton::new(spec, key_type);
                debug!(shape = "map", carrier = %skeleton.names().carrier(), "rendering container");
                builder.node(&skeleton).build()
            }
            Shape::List => {
                let skeleton = ListSkeleton::new(spec);
                debug!(shape = "list", carrier = %skeleton.names().carrier(), "rendering container");
                builder.node(&skeleton).build()
            }
        }
    }
}
