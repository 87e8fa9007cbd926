//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use zahlklar_core::RuleSet;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule file: {}", self.rules.display());

        match RuleSet::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rule file is valid!");
                println!("  Code: {}", rules.code());
                println!("  Name: {}", rules.name());
                println!("  Rounding rules: {}", rules.rounding().rule_count());
                println!("  Overrides: {}", rules.overrides().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule file is invalid!");
                println!("  Error: {e}");
                Err(CliError::InvalidRules(e.to_string()).into())
            }
        }
    }
}
