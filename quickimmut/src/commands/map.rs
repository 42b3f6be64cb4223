use clap::Args;
use eyre::Result;
use quickimmut_core::ContainerSpec;

use super::GenerateOptions;

#[derive(Args)]
pub struct MapCommand {
    /// Key type, e.g. `Key` or `*Key`
    pub key_type: String,

    /// Value type, e.g. `Valu` or `*Valu`
    pub value_type: String,
}

impl MapCommand {
    pub fn run(&self, options: &GenerateOptions) -> Result<()> {
        let spec = options.apply(ContainerSpec::map(&self.key_type, &self.value_type));
        options.emit(&[spec])
    }
}
