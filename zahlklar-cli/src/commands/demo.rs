//! Demo command implementation

use super::{create_formatter, init_logging, OutputFormat};
use crate::output::Simplified;
use anyhow::Result;
use clap::Args;
use zahlklar_engine::NumberSimplifier;

/// Sample sentences covering every rule family
pub const SAMPLES: &[&str] = &[
    "324.620,22 Euro wurden gespendet.",
    "1.897 Menschen nahmen teil.",
    "25 Prozent der Bevölkerung sind betroffen.",
    "90 Prozent stimmten zu.",
    "14 Prozent lehnten ab.",
    "Bei 38,7 Grad Celsius ist es sehr heiß.",
    "denn die Rente steigt um 4,57 Prozent.",
    "1.000.000 Euro wurden gespendet.",
    "10.000 Menschen waren anwesend.",
    "12.500 Besucher kamen zur Veranstaltung.",
    "250 Kilogramm wiegt die Lieferung.",
    "30 Prozent der Fläche sind betroffen.",
    "Die Temperatur beträgt -15,5 Grad.",
    "Am 1. Januar 2024 waren es 5.678 Teilnehmer.",
    "1.234.567,89€ wurden überwiesen.",
    "60 Prozent der Teilnehmer stimmten zu.",
    "Der Anteil beträgt 33 Prozent der Gesamtfläche.",
    "Im Jahr 2024 gab es 1.234 Ereignisse.",
    "Der pH-Wert beträgt 7,4.",
    "Um 15:30 Uhr beginnt der Termin.",
];

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DemoArgs {
    /// Execute the demo command
    pub fn execute(&self) -> Result<()> {
        init_logging(false, self.verbose);

        let simplifier = NumberSimplifier::new()?;
        let mut formatter = create_formatter(self.format, None, true)?;
        for entry in run_samples(&simplifier) {
            formatter.format_entry(&entry)?;
        }
        formatter.finish()
    }
}

/// Simplify every sample sentence
pub fn run_samples(simplifier: &NumberSimplifier) -> Vec<Simplified> {
    simplifier
        .simplify_batch(SAMPLES)
        .into_iter()
        .zip(SAMPLES)
        .enumerate()
        .map(|(i, (output, input))| Simplified {
            source: format!("sample #{}", i + 1),
            input: input.to_string(),
            output,
        })
        .collect()
}
