use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct StructCommand {
    /// Ignored; the struct generator does not exist yet
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    args: Vec<String>,
}

impl StructCommand {
    pub fn run(&self) -> Result<()> {
        eprintln!("sorry, struct feature not actually implemented.  PRs maybe welcome.");
        std::process::exit(2);
    }
}
