//! CLI command implementations

use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod demo;
pub mod generate_config;
pub mod simplify;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Simplify numbers in files, inline text or stdin
    Simplify(simplify::SimplifyArgs),

    /// Run the built-in German sample sentences
    Demo(demo::DemoArgs),

    /// Validate a rule file
    Validate(validate::ValidateArgs),

    /// Write the built-in rules as a template rule file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Simplify(args) => args.execute(),
            Commands::Demo(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Simplified text only
    Text,
    /// JSON array of source/input/output objects
    Json,
    /// Markdown sections with the original quoted
    Markdown,
}

/// Build the formatter for `format`, writing to `output` or stdout
pub(crate) fn create_formatter(
    format: OutputFormat,
    output: Option<&Path>,
    show_input: bool,
) -> Result<Box<dyn OutputFormatter>> {
    let writer: Box<dyn Write + Send + Sync> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, show_input)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    })
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Commands may run more than once in one process (tests)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
