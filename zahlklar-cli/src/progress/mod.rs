//! Progress bar for multi-file runs

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Bar over the input files, hidden when quiet or for a single file
pub struct FileProgress {
    bar: Option<ProgressBar>,
}

impl FileProgress {
    /// Start a bar over `total` files
    pub fn start(total: usize, quiet: bool) -> Result<Self> {
        if quiet || total <= 1 {
            return Ok(Self { bar: None });
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.green/white} {pos}/{len} {wide_msg}")?
                .progress_chars("=> "),
        );
        Ok(Self { bar: Some(bar) })
    }

    /// Mark one file as simplified
    pub fn advance(&self, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    /// Clear the bar once all files are done
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
