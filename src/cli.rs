//! The command-line surface: argument parsing and the validated [`Config`]
//! it produces.
//!
//! Mirrors the teacher's `Cli` (a `clap`-derive struct) / `Config` (plain,
//! validated data the rest of the program actually consumes) split.

use clap::Parser;
use std::path::PathBuf;

/// Runs a PLAS source file.
#[derive(Parser, Debug)]
#[command(name = "plas", about = "Runs a PLAS source file", version)]
pub struct Cli {
    /// Path to the PLAS source file to run.
    pub path: Option<PathBuf>,

    /// Write an advisory token dump alongside the source file, as
    /// `<file>.tkn`.
    #[arg(long)]
    pub dump_tokens: bool,

    /// Disable colorized diagnostics even when stdout is a TTY.
    #[arg(long)]
    pub no_color: bool,
}

/// The validated, plain-data configuration the pipeline runs against.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub dump_tokens: bool,
    pub color: bool,
}

impl Cli {
    /// Converts parsed arguments into a [`Config`], or
    /// [`crate::errors::ConfigError::MissingFile`] if no path was given.
    pub fn to_config(&self) -> Result<Config, crate::errors::ConfigError> {
        let path = self
            .path
            .clone()
            .ok_or(crate::errors::ConfigError::MissingFile)?;
        let color = !self.no_color && is_stdout_tty();
        Ok(Config {
            path,
            dump_tokens: self.dump_tokens,
            color,
        })
    }
}

fn is_stdout_tty() -> bool {
    use crossterm::tty::IsTty;
    std::io::stdout().is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_a_config_error() {
        let cli = Cli {
            path: None,
            dump_tokens: false,
            no_color: false,
        };
        assert!(cli.to_config().is_err());
    }

    #[test]
    fn present_path_builds_a_config() {
        let cli = Cli {
            path: Some(PathBuf::from("program.plas")),
            dump_tokens: true,
            no_color: true,
        };
        let config = cli.to_config().unwrap();
        assert_eq!(config.path, PathBuf::from("program.plas"));
        assert!(config.dump_tokens);
        assert!(!config.color);
    }
}
