use clap::Args;
use eyre::Result;
use quickimmut_core::ContainerSpec;

use super::GenerateOptions;

#[derive(Args)]
pub struct ListCommand {
    /// Element type, e.g. `Valu` or `*Valu`
    pub value_type: String,
}

impl ListCommand {
    pub fn run(&self, options: &GenerateOptions) -> Result<()> {
        let spec = options.apply(ContainerSpec::list(&self.value_type));
        options.emit(&[spec])
    }
}
