//! Export sinks for resolved tables (spec §6): CSV, JSON, and Excel.
//!
//! JSON export is the full `Table` record, per spec. CSV and Excel export
//! the flattened `layout` grid only (a spreadsheet has no room for bbox
//! metadata).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use oxidize_pdf::tables::Table;

use crate::cli::ExportFormat;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error writing {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("json error writing {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("xlsx error writing {path}: {source}")]
    Xlsx {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

pub fn extension_for(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Csv => "csv",
        ExportFormat::Json => "json",
        ExportFormat::Excel => "xlsx",
    }
}

pub fn write_table(path: &Path, table: &Table, format: ExportFormat) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(path, table),
        ExportFormat::Json => write_json(path, table),
        ExportFormat::Excel => write_excel(path, table),
    }
}

fn write_csv(path: &Path, table: &Table) -> Result<(), ExportError> {
    let path_s = path.display().to_string();
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path_s.clone(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    for row in &table.layout {
        let record: Vec<&str> = row.iter().map(|cell| cell.text.as_str()).collect();
        writer
            .write_record(&record)
            .map_err(|source| ExportError::Csv {
                path: path_s.clone(),
                source,
            })?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path_s.clone(),
        source,
    })
}

fn write_json(path: &Path, table: &Table) -> Result<(), ExportError> {
    let path_s = path.display().to_string();
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path_s.clone(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), table).map_err(|source| {
        ExportError::Json {
            path: path_s.clone(),
            source,
        }
    })
}

fn write_excel(path: &Path, table: &Table) -> Result<(), ExportError> {
    let path_s = path.display().to_string();
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (row_idx, row) in table.layout.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            sheet
                .write_string(row_idx as u32, col_idx as u16, &cell.text)
                .map_err(|source| ExportError::Xlsx {
                    path: path_s.clone(),
                    source,
                })?;
        }
    }
    workbook.save(path).map_err(|source| ExportError::Xlsx {
        path: path_s.clone(),
        source,
    })
}

/// `<export_dir>/<pdf-path-with-/→_>_<table-index>.{csv|json|xlsx}` (spec §6).
pub fn output_path(export_dir: &Path, pdf_path: &Path, table_index: usize, format: ExportFormat) -> std::path::PathBuf {
    let flattened = pdf_path
        .with_extension("")
        .to_string_lossy()
        .trim_start_matches(['/', '.'])
        .replace('/', "_");
    export_dir.join(format!("{flattened}_{table_index}.{}", extension_for(format)))
}
