//! Simplify command implementation

use super::{create_formatter, init_logging, OutputFormat};
use crate::error::CliError;
use crate::input::{file_reader::FileReader, glob_resolver::resolve_patterns};
use crate::output::Simplified;
use crate::progress::FileProgress;
use anyhow::Result;
use clap::Args;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use zahlklar_engine::{NumberSimplifier, NumberSimplifierBuilder};

/// Arguments for the simplify command
#[derive(Debug, Args)]
pub struct SimplifyArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Inline text to simplify (repeatable)
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Vec<String>,

    /// Custom rule file (default: built-in German rules)
    #[arg(short, long, value_name = "FILE", env = "ZAHLKLAR_RULES")]
    pub rules: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Keep percentages as written
    #[arg(long)]
    pub no_percentages: bool,

    /// Skip the literal sentence overrides
    #[arg(long)]
    pub no_overrides: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SimplifyArgs {
    /// Execute the simplify command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        log::info!("Starting number simplification");
        log::debug!("Arguments: {:?}", self);

        let simplifier = self.build_simplifier()?;
        let results = if !self.input.is_empty() {
            self.simplify_files(&simplifier)?
        } else if !self.text.is_empty() {
            self.simplify_inline(&simplifier)
        } else {
            let input = FileReader::read_stdin()?;
            let output = simplifier.simplify(&input);
            vec![Simplified {
                source: "stdin".to_string(),
                input,
                output,
            }]
        };

        let mut formatter = create_formatter(self.format, self.output.as_deref(), false)?;
        for entry in &results {
            formatter.format_entry(entry)?;
        }
        formatter.finish()?;

        log::info!("Simplified {} text(s)", results.len());
        Ok(())
    }

    fn build_simplifier(&self) -> Result<NumberSimplifier> {
        let mut builder = NumberSimplifierBuilder::new()
            .percentages(!self.no_percentages)
            .overrides(!self.no_overrides);
        if let Some(path) = &self.rules {
            builder = builder.rules_file(path);
        }

        builder
            .build()
            .map_err(|e| CliError::InvalidRules(e.to_string()).into())
    }

    fn simplify_inline(&self, simplifier: &NumberSimplifier) -> Vec<Simplified> {
        simplifier
            .simplify_batch(&self.text)
            .into_iter()
            .zip(&self.text)
            .enumerate()
            .map(|(i, (output, input))| Simplified {
                source: format!("text #{}", i + 1),
                input: input.clone(),
                output,
            })
            .collect()
    }

    fn simplify_files(&self, simplifier: &NumberSimplifier) -> Result<Vec<Simplified>> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let progress = FileProgress::start(files.len(), self.quiet)?;

        let results = files
            .par_iter()
            .map(|path| -> Result<Simplified> {
                let input = FileReader::read_text(path)?;
                let output = simplifier.simplify(&input);
                progress.advance(&display_name(path));
                Ok(Simplified {
                    source: path.display().to_string(),
                    input,
                    output,
                })
            })
            .collect::<Result<Vec<_>>>();

        progress.finish();
        results
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
