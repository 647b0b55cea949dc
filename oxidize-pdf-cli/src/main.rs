//! `oxidizepdf`: extracts tabular data from born-digital PDF pages and
//! exports it as CSV, JSON, or Excel (spec §6).

mod cli;
mod export;
mod pipeline;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use oxidize_pdf::tables::LayoutParams;
use tracing_subscriber::EnvFilter;

use cli::{Args, DetectionMethod, LayoutMethod};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match Args::parse().normalize() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(2);
        }
    };

    // Per spec §6: exit 0 regardless of per-file errors (logged via
    // tracing::error!); only argument/usage errors exit non-zero.
    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(2);
    }
}

fn run(args: Args) -> Result<()> {
    if args.detection_method == DetectionMethod::ModelBased
        || args.layout_method == LayoutMethod::ModelBased
    {
        tracing::warn!(
            "model-based detection/layout is an external-collaborator interface point (spec §4.4) \
             with no bundled model in this build; falling back to the rule-based pipeline"
        );
    }

    std::fs::create_dir_all(&args.export)
        .with_context(|| format!("creating export directory {}", args.export.display()))?;

    let paths = collect_pdf_paths(&args.path)
        .with_context(|| format!("resolving input path {}", args.path.display()))?;

    let params = LayoutParams {
        max_charspace: args.max_charspace,
        max_linespace: args.max_linespace,
        ..LayoutParams::default()
    };

    let outcomes = pipeline::run_pool(
        paths,
        &args.export,
        args.export_format,
        args.overwrite,
        params,
        args.workers,
    );

    let mut total_tables = 0usize;
    let mut failures = 0usize;
    for outcome in &outcomes {
        match &outcome.error {
            None => total_tables += outcome.tables_written,
            Some(message) => {
                failures += 1;
                tracing::error!(path = %outcome.path.display(), error = %message, "failed to process file");
            }
        }
    }

    tracing::info!(
        files = outcomes.len(),
        failures,
        tables_written = total_tables,
        "done"
    );
    Ok(())
}

/// Resolves the positional `path` argument into a list of `*.pdf` files
/// (spec §10: directory walking restricted to the `.pdf` extension,
/// case-insensitive, via plain recursion rather than a walking crate).
fn collect_pdf_paths(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    anyhow::ensure!(path.is_dir(), "{} is neither a file nor a directory", path.display());

    let mut found = Vec::new();
    walk_dir(path, &mut found)?;
    found.sort();
    Ok(found)
}

fn walk_dir(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir(&path, found)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false)
        {
            found.push(path);
        }
    }
    Ok(())
}
