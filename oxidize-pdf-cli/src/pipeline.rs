//! Per-file extraction and the worker pool that fans it out (spec §5, §6).
//!
//! The pool shape mirrors `oxidize_pdf::batch::worker::WorkerPool`: an
//! `mpsc` channel of work items, N threads draining a shared queue, results
//! streamed back over a second channel. Each worker opens its own PDF
//! document so no state crosses thread boundaries (spec §5: the core never
//! observes concurrent mutation).

use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use oxidize_pdf::graphics::extraction::GraphicsExtractor;
use oxidize_pdf::parser::{PdfDocument, PdfReader};
use oxidize_pdf::tables::{self, LayoutParams};
use oxidize_pdf::text::extraction::TextExtractor;

use crate::cli::ExportFormat;
use crate::export;

pub struct FileOutcome {
    pub path: PathBuf,
    pub tables_written: usize,
    pub error: Option<String>,
}

/// Extracts every table from every page of one PDF and writes it to
/// `export_dir`. Never panics; any failure is folded into `FileOutcome::error`
/// so the caller can log it and move on (spec §7: per-file errors are
/// recoverable, the process exit code is unaffected).
pub fn process_file(
    pdf_path: &Path,
    export_dir: &Path,
    format: ExportFormat,
    overwrite: bool,
    params: LayoutParams,
) -> FileOutcome {
    match process_file_inner(pdf_path, export_dir, format, overwrite, params) {
        Ok(tables_written) => FileOutcome {
            path: pdf_path.to_path_buf(),
            tables_written,
            error: None,
        },
        Err(err) => FileOutcome {
            path: pdf_path.to_path_buf(),
            tables_written: 0,
            error: Some(err),
        },
    }
}

fn process_file_inner(
    pdf_path: &Path,
    export_dir: &Path,
    format: ExportFormat,
    overwrite: bool,
    params: LayoutParams,
) -> Result<usize, String> {
    let reader = PdfReader::open(pdf_path).map_err(|e| format!("decode error: {e}"))?;
    let mut document = PdfDocument::new(reader);
    let page_count = document
        .page_count()
        .map_err(|e| format!("decode error: {e}"))?;

    let mut graphics_extractor = GraphicsExtractor::default();
    let mut text_extractor = TextExtractor::default();

    let mut written = 0usize;
    for page_index in 0..page_count {
        let page = document
            .get_page(page_index)
            .map_err(|e| format!("decode error on page {page_index}: {e}"))?;
        let width = page.width();
        let height = page.height();

        let graphics = graphics_extractor
            .extract_from_page(&document, page_index as usize)
            .map_err(|e| format!("decode error on page {page_index}: {e}"))?;
        let text = text_extractor
            .extract_from_page(&document, page_index)
            .map_err(|e| format!("decode error on page {page_index}: {e}"))?;

        let page_view = tables::bridge::build_page_view(width, height, &graphics, &text.fragments);
        let found = tables::extract_tables(&page_view, params);

        for (table_index, table) in found.iter().enumerate() {
            let out_path = export::output_path(export_dir, pdf_path, table_index, format);
            if out_path.exists() && !overwrite {
                tracing::warn!(path = %out_path.display(), "export exists, skipping (use --overwrite)");
                continue;
            }
            export::write_table(&out_path, table, format)
                .map_err(|e| format!("export error: {e}"))?;
            written += 1;
        }
    }
    Ok(written)
}

/// Runs `process_file` over `paths` using a pool of `num_workers` threads.
/// A pool of 1 runs inline on the calling thread (no thread spawned).
pub fn run_pool(
    paths: Vec<PathBuf>,
    export_dir: &Path,
    format: ExportFormat,
    overwrite: bool,
    params: LayoutParams,
    num_workers: usize,
) -> Vec<FileOutcome> {
    if num_workers <= 1 {
        return paths
            .into_iter()
            .map(|p| process_file(&p, export_dir, format, overwrite, params))
            .collect();
    }

    let queue = Arc::new(Mutex::new(paths.into_iter()));
    let (result_tx, result_rx) = mpsc::channel();
    let export_dir = export_dir.to_path_buf();

    let mut handles = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let queue = Arc::clone(&queue);
        let result_tx = result_tx.clone();
        let export_dir = export_dir.clone();
        handles.push(thread::spawn(move || loop {
            let next = queue.lock().expect("queue mutex poisoned").next();
            match next {
                Some(path) => {
                    let outcome = process_file(&path, &export_dir, format, overwrite, params);
                    if result_tx.send(outcome).is_err() {
                        break;
                    }
                }
                None => break,
            }
        }));
    }
    drop(result_tx);

    let outcomes: Vec<FileOutcome> = result_rx.into_iter().collect();
    for handle in handles {
        let _ = handle.join();
    }
    outcomes
}
