mod batch;
mod completions;
mod list;
mod map;
mod structure;

use std::path::PathBuf;

use batch::BatchCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use list::ListCommand;
use map::MapCommand;
use quickimmut_codegen_go::{ContainerCodegen, Generator};
use quickimmut_core::ContainerSpec;
use structure::StructCommand;
use tracing::debug;

use crate::sink::Sink;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for quickimmut_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

const EXAMPLES: &str = "\
Examples:
  quickimmut map Key Valu
  quickimmut map '*Key' '*Valu'
  quickimmut list Valu
  quickimmut list '*Valu'
  quickimmut --exp --attach GroupingType map Key Valu

Options take two dashes: write --exp=true --attach=GroupingType, not the
single-dash -exp=true -attach=GroupingType of older releases.

Key and value types may be exported or unexported, pointers or not, but must
be named types: no map, slice or interface{} literals. Nothing validates
this; nonsensical input gives nonsensical code.

Go code is written to stdout without a package clause, so compose files with
the shell:

  (echo 'package foo'; quickimmut map Key Valu; quickimmut list Wow) > gen.go

or append to a file that already exists, which suits go:generate lines since
they don't support redirection:

  //go:generate quickimmut --output gen.go map Key Valu

--output only appends; it never creates the file.";

#[derive(Parser)]
#[command(name = "quickimmut")]
#[command(version)]
#[command(about = "Generate immutable, builder-backed Go container types")]
#[command(after_long_help = EXAMPLES)]
pub(crate) struct Cli {
    #[command(flatten)]
    options: GenerateOptions,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Map(cmd) => cmd.run(&self.options),
            Commands::List(cmd) => cmd.run(&self.options),
            Commands::Struct(cmd) => cmd.run(),
            Commands::Batch(cmd) => cmd.run(&self.options),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an immutable map from KEY_TYPE to VALUE_TYPE
    Map(MapCommand),

    /// Generate an immutable list of VALUE_TYPE
    List(ListCommand),

    /// Generate a read-only struct (not implemented)
    Struct(StructCommand),

    /// Generate every container listed in a TOML manifest
    Batch(BatchCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by the generating commands.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct GenerateOptions {
    /// Make carrier types exported symbols (`--exp=false` turns it off)
    #[arg(
        long = "exp",
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub exported: bool,

    /// Attach constructor functions to this type as methods
    #[arg(long, global = true, value_name = "TYPE")]
    pub attach: Option<String>,

    /// Append to this existing file instead of writing to stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateOptions {
    /// Apply visibility and attachment flags to a specification.
    pub fn apply(&self, spec: ContainerSpec) -> ContainerSpec {
        spec.exported(self.exported)
            .attach_to(self.attach.clone().unwrap_or_default())
    }

    /// Render all specifications, then write them to the sink in one go.
    pub fn emit(&self, specs: &[ContainerSpec]) -> Result<()> {
        let generator = Generator::new();
        debug!(language = generator.language(), count = specs.len(), "generating");
        let code = generator.render_all(specs);
        Sink::new(self.output.as_deref()).write(&code)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["quickimmut", "list", "Valu"]);
        assert!(!cli.options.exported);
        assert_eq!(cli.options.attach, None);
        assert_eq!(cli.options.output, None);
        assert_eq!(cli.verbosity(), 0);
    }

    #[test]
    fn test_exp_flag_forms() {
        assert!(parse(&["quickimmut", "--exp", "list", "Valu"]).options.exported);
        assert!(parse(&["quickimmut", "--exp=true", "list", "Valu"]).options.exported);
        assert!(!parse(&["quickimmut", "--exp=false", "list", "Valu"]).options.exported);
        assert!(parse(&["quickimmut", "list", "Valu", "--exp"]).options.exported);
    }

    #[test]
    fn test_long_help_documents_two_dash_options() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("--exp=true --attach=GroupingType"));
    }

    #[test]
    fn test_attach_with_equals() {
        let cli = parse(&["quickimmut", "--exp=true", "--attach=GroupingType", "map", "Key", "Valu"]);
        assert!(cli.options.exported);
        assert_eq!(cli.options.attach.as_deref(), Some("GroupingType"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse(&[
            "quickimmut",
            "map",
            "Key",
            "Valu",
            "--attach",
            "GroupingType",
            "-o",
            "gen.go",
            "-vv",
        ]);
        assert_eq!(cli.options.attach.as_deref(), Some("GroupingType"));
        assert_eq!(cli.options.output, Some(PathBuf::from("gen.go")));
        assert_eq!(cli.verbosity(), 2);
    }

    #[test]
    fn test_apply_options() {
        let options = GenerateOptions {
            exported: true,
            attach: Some("GroupingType".to_string()),
            output: None,
        };
        let spec = options.apply(ContainerSpec::list("Valu"));
        assert!(spec.is_exported());
        assert_eq!(spec.attachment(), Some("GroupingType"));

        let spec = GenerateOptions::default().apply(ContainerSpec::list("Valu"));
        assert!(!spec.is_exported());
        assert_eq!(spec.attachment(), None);
    }

    #[test]
    fn test_missing_command_is_usage_error() {
        let err = Cli::try_parse_from(["quickimmut"]).err().unwrap();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_command_is_usage_error() {
        let err = Cli::try_parse_from(["quickimmut", "set", "Valu"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_insufficient_arguments_are_usage_errors() {
        for args in [
            &["quickimmut", "map", "Key"][..],
            &["quickimmut", "map"][..],
            &["quickimmut", "list"][..],
        ] {
            let err = Cli::try_parse_from(args).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
            assert_eq!(err.exit_code(), 2);
        }
    }
}
