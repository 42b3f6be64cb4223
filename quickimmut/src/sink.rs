//! Where generated code goes: stdout, or appended to an existing file.

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tracing::info;

/// Destination for generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    /// Append to a file that must already exist (it should already carry
    /// its `package` clause).
    Append(PathBuf),
}

impl Sink {
    pub fn new(output: Option<&Path>) -> Self {
        match output {
            Some(path) => Self::Append(path.to_path_buf()),
            None => Self::Stdout,
        }
    }

    /// Write the complete generated text in one go.
    pub fn write(&self, code: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                info!("writing generated code to stdout");
                let mut stdout = io::stdout().lock();
                stdout.write_all(code.as_bytes())?;
                stdout.flush()?;
            }
            Self::Append(path) => {
                info!(path = %path.display(), "appending generated code");
                let mut file = OpenOptions::new()
                    .append(true)
                    .open(path)
                    .wrap_err_with(|| format!("Failed to open {} for appending", path.display()))?;
                file.write_all(code.as_bytes())
                    .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
            }
        }
        Ok(())
    }
}
