//! Command handlers for the `cabinetkit` binary.
//!
//! Every command writes its result to stdout; logs go to stderr.

pub mod format;
pub mod generate;
pub mod patterns;
pub mod templates;

pub use generate::{GenerateArgs, OutputFormat};
pub use patterns::{PatternArgs, PatternsArgs};
pub use templates::TemplatesArgs;

use cabinetkit_settings::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parametric kitchen cabinet generator
#[derive(Parser, Debug)]
#[command(
    name = "cabinetkit",
    author,
    version,
    long_version = crate::LONG_VERSION,
    about,
    long_about = None
)]
pub struct Cli {
    /// Config file (TOML or JSON); defaults to the platform config directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog templates
    Templates(TemplatesArgs),
    /// Generate a cabinet and print its cut list
    Generate(GenerateArgs),
    /// Show one drill pattern
    Pattern(PatternArgs),
    /// List drill patterns
    Patterns(PatternsArgs),
}

impl Cli {
    pub fn execute(&self) -> anyhow::Result<()> {
        let config = Config::load_or_default(self.config.as_deref())?;
        tracing::debug!(
            material = %config.generation.material,
            unit = %config.export.unit,
            "Using configuration"
        );

        let output = match &self.command {
            Command::Templates(args) => args.execute()?,
            Command::Generate(args) => args.execute(&config)?,
            Command::Pattern(args) => args.execute()?,
            Command::Patterns(args) => args.execute()?,
        };

        print!("{}", output);
        Ok(())
    }
}
