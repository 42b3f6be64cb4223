//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::{Result, eyre};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles/type-checks.
pub trait CompileChecker {
    /// Check that the code in the given directory compiles.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Go compile checker using `go build`.
pub struct GoChecker;

impl GoChecker {
    /// Build and run the `main` package in `dir`, returning its stdout.
    pub fn run(&self, dir: &Path) -> Result<String, CompileError> {
        go(dir, &["run", "."])
    }
}

impl CompileChecker for GoChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        go(dir, &["build", "./..."]).map(|_| ())
    }
}

fn go(dir: &Path, args: &[&str]) -> Result<String, CompileError> {
    let output = Command::new("go")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| CompileError {
            message: format!("Failed to run go {}: {}", args.join(" "), e),
            output: String::new(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if output.status.success() {
        Ok(stdout)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(CompileError {
            message: format!("go {} failed", args.join(" ")),
            output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
        })
    }
}

/// Write a Go `main` package into a temporary directory.
///
/// `files` are (file name, contents) pairs placed next to a generated
/// `go.mod`. The directory is removed when the returned `TempDir` is dropped.
pub fn write_go_package(files: &[(&str, &str)]) -> Result<tempfile::TempDir> {
    let temp_dir = tempfile::TempDir::new()?;
    std::fs::write(temp_dir.path().join("go.mod"), "module quickimmuttest\n\ngo 1.18\n")?;
    for (name, contents) in files {
        std::fs::write(temp_dir.path().join(name), contents)?;
    }
    Ok(temp_dir)
}

/// Write a Go package and check that it compiles.
pub fn assert_go_compiles(files: &[(&str, &str)]) -> Result<()> {
    let temp_dir = write_go_package(files)?;

    GoChecker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        for (name, contents) in files {
            eprintln!("── {} ──\n{}", name, contents);
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}
