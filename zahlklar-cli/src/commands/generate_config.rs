//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = zahlklar_core::rules::embedded_source();

        let Some(output) = &self.output else {
            io::stdout().write_all(template.as_bytes())?;
            return Ok(());
        };

        std::fs::write(output, template)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Rule template written to {}", output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the rule file to adjust phrases, thresholds and overrides");
        println!("2. Validate your rules:");
        println!("   zahlklar validate --rules {}", output.display());
        println!("3. Use them for simplifying:");
        println!(
            "   zahlklar simplify -i input.txt --rules {}",
            output.display()
        );

        Ok(())
    }
}
