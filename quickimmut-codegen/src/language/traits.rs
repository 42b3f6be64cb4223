//! Language-agnostic code generation traits.

use quickimmut_core::ContainerSpec;

/// Trait for language-specific container generators.
///
/// Implement this trait to emit immutable containers in a new language.
pub trait ContainerCodegen {
    /// Language identifier (e.g., "go")
    fn language(&self) -> &'static str;

    /// Render the declarations for one container.
    fn render(&self, spec: &ContainerSpec) -> String;

    /// Render several containers, concatenated in order.
    fn render_all(&self, specs: &[ContainerSpec]) -> String {
        specs.iter().map(|spec| self.render(spec)).collect()
    }
}
