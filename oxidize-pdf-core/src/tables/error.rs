//! Error kinds for the table reconstruction pipeline (spec §7).
//!
//! All four kinds are recoverable at file or page granularity: the
//! dispatcher logs and moves on rather than aborting a whole run. Nothing in
//! `tables::` ever panics on empty input; arithmetic over an empty character
//! set short-circuits to an empty result instead of raising one of these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    /// The PDF decoding collaborator failed to parse a page's content
    /// stream. The file is skipped; the path and underlying error are
    /// logged by the caller.
    #[error("failed to decode page: {0}")]
    DecodeError(String),

    /// The page has no characters or no rulings. Not an error condition:
    /// callers should treat this the same as an empty table list.
    #[error("page has no extractable content")]
    EmptyPage,

    /// A candidate region collapsed: its bbox became empty after trimming,
    /// the grid resolved to fewer than two rows or columns, or no column
    /// separators were found. The region is discarded; sibling regions on
    /// the same page are unaffected.
    #[error("region degenerated during layout extraction: {0}")]
    DegenerateRegion(String),

    /// An export sink refused to write a table.
    #[error("failed to export table: {0}")]
    ExportError(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
