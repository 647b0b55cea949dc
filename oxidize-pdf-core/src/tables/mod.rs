//! Rule-based, geometry-driven table reconstruction.
//!
//! This module is a from-scratch pipeline (not the older
//! [`crate::text::table_detection`] border-grid detector it supersedes): it
//! locates table regions from ruling-line and character evidence, derives a
//! row/column grid from clustering and font transitions, and resolves a
//! cell grid with header- and continuation-row merging. See the crate's
//! `SPEC_FULL.md` for the full design.
//!
//! The three stages are pure functions over an immutable [`geometry::PageView`]:
//!
//! ```text
//! PageView -> TableFinder -> [TableRegion] -> (per region) LayoutExtractor -> Layout -> CellResolver -> Table
//! ```

pub mod bridge;
pub mod error;
pub mod finder;
pub mod geometry;
pub mod layout;
pub mod params;
pub mod resolver;

pub use error::{Result, TableError};
pub use finder::{TableFinder, TableRegion};
pub use geometry::{BBox, Char, CropResult, Curve, PageView, Rect, RuleLine};
pub use layout::{ColumnSeparator, Layout, LayoutExtractor, RowSeparator};
pub use params::LayoutParams;
pub use resolver::{Cell, CellResolver, Table};

/// Runs the full pipeline over one page: find regions, extract layout,
/// resolve cells. Degenerate regions (spec §7 `DegenerateRegion`) are
/// logged and skipped rather than failing the whole page; a page with no
/// extractable content simply yields an empty `Vec`.
pub fn extract_tables(page: &PageView, params: LayoutParams) -> Vec<Table> {
    let finder = TableFinder::new(params);
    let layout_extractor = LayoutExtractor::new(params);
    let resolver = CellResolver::new(params);

    let regions = finder.find(page);
    if regions.is_empty() {
        tracing::debug!("no table regions found on page");
        return Vec::new();
    }

    let mut tables = Vec::with_capacity(regions.len());
    for region in &regions {
        match layout_extractor.extract(region, page) {
            Ok((resolved_region, layout)) => {
                tracing::debug!(
                    header = layout.header,
                    footer = layout.footer,
                    columns = layout.columns.len(),
                    "layout extracted"
                );
                match resolver.resolve(&resolved_region, &layout, page) {
                    Ok(table) => {
                        tracing::debug!(rows = table.layout.len(), "cells resolved");
                        tables.push(table);
                    }
                    Err(err) => tracing::warn!(%err, "discarding region: cell resolution failed"),
                }
            }
            Err(err) => tracing::warn!(%err, "discarding region: layout extraction failed"),
        }
    }
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_produces_no_tables() {
        let page = PageView::new(BBox::new(0.0, 0.0, 612.0, 792.0));
        assert!(extract_tables(&page, LayoutParams::default()).is_empty());
    }

    #[test]
    fn end_to_end_single_table() {
        let bbox = BBox::new(0.0, 0.0, 612.0, 792.0);
        let mut page = PageView::new(bbox);
        page.lines.push(RuleLine::new(50.0, 560.0, 120.0, 120.0));
        page.chars.push(Char::new(BBox::new(55.0, 130.0, 95.0, 142.0), "Revenue", "R", 10.0));
        page.chars.push(Char::new(BBox::new(520.0, 130.0, 540.0, 142.0), "100", "R", 10.0));
        page.chars.push(Char::new(BBox::new(55.0, 150.0, 80.0, 162.0), "Cost", "R", 10.0));
        page.chars.push(Char::new(BBox::new(520.0, 150.0, 535.0, 162.0), "80", "R", 10.0));

        let tables = extract_tables(&page, LayoutParams::default());
        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.layout.len(), 2);
        assert_eq!(table.layout[0].len(), 2);
        assert_eq!(table.layout[0][0].text, "Revenue");
        assert_eq!(table.layout[0][1].text, "100");
        assert_eq!(table.layout[1][0].text, "Cost");
        assert_eq!(table.layout[1][1].text, "80");
    }
}
