//! Command-line argument surface (spec §6, §10).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DetectionMethod {
    RuleBased,
    ModelBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutMethod {
    RuleBased,
    ModelBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

/// Extract tables out of born-digital PDF pages.
#[derive(Debug, Parser)]
#[command(name = "oxidizepdf", version, about)]
pub struct Args {
    /// A single PDF file, or a directory walked recursively for `*.pdf` files.
    pub path: PathBuf,

    #[arg(long, value_enum, default_value = "rule-based")]
    pub detection_method: DetectionMethod,

    #[arg(long, value_enum, default_value = "rule-based")]
    pub layout_method: LayoutMethod,

    /// Row-gap threshold; may be negative (fine-printed tables can have
    /// near-touching or slightly overlapping character bboxes).
    #[arg(long, default_value_t = -0.3)]
    pub max_linespace: f64,

    /// Column-gap threshold.
    #[arg(long, default_value_t = 5.0)]
    pub max_charspace: f64,

    /// Debug overlay directory (optional; unused unless overlays are requested).
    #[arg(long)]
    pub img_path: Option<PathBuf>,

    /// Overwrite existing export files instead of skipping them.
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    #[arg(long, default_value = "tables")]
    pub export: PathBuf,

    #[arg(long, value_enum)]
    pub export_format: ExportFormat,

    /// Worker pool size. `N > 1` forces `--overwrite` and is rejected in
    /// combination with either `--detection_method model-based` or
    /// `--layout_method model-based` (model instances are not duplicated
    /// per worker).
    #[arg(long, default_value_t = 1)]
    pub workers: usize,
}

impl Args {
    /// Applies the `--workers` side effects and rejects invalid combinations.
    /// Returns a usage error message on conflict.
    pub fn normalize(mut self) -> Result<Self, String> {
        if self.workers > 1 {
            if self.detection_method == DetectionMethod::ModelBased
                || self.layout_method == LayoutMethod::ModelBased
            {
                return Err(
                    "--workers > 1 cannot be combined with a model-based detection or layout method"
                        .to_string(),
                );
            }
            self.overwrite = true;
        }
        Ok(self)
    }
}
