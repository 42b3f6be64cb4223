use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use quickimmut_manifest::Manifest;
use tracing::{info, warn};

use super::{GenerateOptions, UnwrapOrExit};

#[derive(Args)]
pub struct BatchCommand {
    /// Path to the manifest listing the containers to generate
    #[arg(default_value = "quickimmut.toml")]
    pub manifest: PathBuf,
}

impl BatchCommand {
    /// Visibility and attachment come from the manifest; only `--output` applies.
    pub fn run(&self, options: &GenerateOptions) -> Result<()> {
        if options.exported || options.attach.is_some() {
            warn!("--exp and --attach are ignored by batch; set them in the manifest");
        }

        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();
        let specs = manifest.containers();
        info!(
            path = %self.manifest.display(),
            containers = specs.len(),
            "loaded manifest"
        );

        options.emit(&specs)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::commands::{Cli, Commands};

    #[test]
    fn test_default_manifest_path() {
        let cli = Cli::try_parse_from(["quickimmut", "batch"]).unwrap();
        match cli.command {
            Commands::Batch(cmd) => assert_eq!(cmd.manifest, PathBuf::from("quickimmut.toml")),
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn test_batch_appends_in_manifest_order() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("quickimmut.toml");
        std::fs::write(
            &manifest,
            "[[container]]\nshape = \"list\"\nvalue = \"Wow\"\n\n\
             [[container]]\nshape = \"map\"\nkey = \"Key\"\nvalue = \"Valu\"\n",
        )
        .unwrap();
        let output = dir.path().join("gen.go");
        std::fs::write(&output, "package foo\n").unwrap();

        let options = GenerateOptions {
            output: Some(output.clone()),
            ..Default::default()
        };
        BatchCommand { manifest }.run(&options).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("package foo\n\ntype wowList struct {"));
        let list_at = content.find("type wowList").unwrap();
        let map_at = content.find("type keyValuMap").unwrap();
        assert!(list_at < map_at);
    }
}
