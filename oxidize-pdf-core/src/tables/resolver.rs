//! `CellResolver`: turns region + separators into an ordered cell grid,
//! applying the post-hoc merge rules (spec §4.3).

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{Result, TableError};
use super::finder::TableRegion;
use super::geometry::{BBox, Char, PageView};
use super::layout::Layout;
use super::params::LayoutParams;

/// One resolved cell of a finished table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub bbox: BBox,
    pub text: String,
    /// The un-shrunk grid rectangle this cell was carved from, before the
    /// text-shrink step (spec §4.3 step 2).
    pub grid_bbox: BBox,
}

/// A fully resolved table: a flat cell list plus the row-major grid used
/// for export (spec §3 `Table`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub bbox: BBox,
    pub header: f64,
    pub footer: f64,
    pub cells: Vec<Cell>,
    pub layout: Vec<Vec<Cell>>,
}

#[derive(Debug, Default)]
pub struct CellResolver {
    params: LayoutParams,
}

/// Internal per-cell bookkeeping kept only while the merge passes run; none
/// of this survives onto the public `Cell`.
#[derive(Clone)]
struct WorkCell {
    grid_bbox: BBox,
    bbox: BBox,
    text: String,
    font: Option<String>,
    has_letters: bool,
    crossed_by_dot_line: bool,
}

impl CellResolver {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    pub fn resolve(&self, region: &TableRegion, layout: &Layout, page: &PageView) -> Result<Table> {
        let mut xs: Vec<f64> = vec![region.bbox.x0, region.bbox.x1];
        xs.extend(layout.columns.iter().map(|c| c.x));
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        xs.dedup_by(|a, b| (*a - *b).abs() < 0.01);

        let mut ys: Vec<f64> = vec![region.bbox.top, layout.footer];
        ys.extend(layout.rows.iter().map(|r| r.y).filter(|y| *y < layout.footer + 0.01));
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        ys.dedup_by(|a, b| (*a - *b).abs() < 0.01);

        if xs.len() < 2 || ys.len() < 2 {
            return Err(TableError::DegenerateRegion("grid collapsed to fewer than 2x2 cells".into()));
        }

        let mut grid: Vec<Vec<WorkCell>> = Vec::with_capacity(ys.len() - 1);
        for row_idx in 0..ys.len() - 1 {
            let (top, bottom) = (ys[row_idx], ys[row_idx + 1]);
            let mut row = Vec::with_capacity(xs.len() - 1);
            for col_idx in 0..xs.len() - 1 {
                let (x0, x1) = (xs[col_idx], xs[col_idx + 1]);
                let grid_bbox = BBox::new(x0, top, x1, bottom);
                row.push(self.build_cell(page, region, grid_bbox));
            }
            grid.push(row);
        }

        merge_header_rows(&mut grid, layout.header, &region.lines);
        merge_first_column_continuations(&mut grid, region, &self.params);
        merge_second_column_continuations(&mut grid, region, &self.params);

        // The spec's "fewer than 3 resulting rows" degenerate condition is
        // interpreted in terms of horizontal grid lines (region top, every
        // row separator, footer), not data rows: a single-row body already
        // has 3 such lines. Two data rows is the minimum a real table can
        // have; anything resolving to one row or none is degenerate.
        if grid.len() < 2 {
            return Err(TableError::DegenerateRegion("fewer than 2 rows after merging".into()));
        }

        let mut cells: Vec<Cell> = Vec::new();
        let mut layout_out: Vec<Vec<Cell>> = grid
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|wc| {
                        let cell = Cell { bbox: wc.bbox, text: wc.text, grid_bbox: wc.grid_bbox };
                        cells.push(cell.clone());
                        cell
                    })
                    .collect()
            })
            .collect();

        // spec §4.3 step 6: `layout`'s empty cells carry the last non-empty
        // text to their left in the same row as a span sentinel, so export
        // can flatten a header that visually spans several grid columns.
        // `cells` (the flat list) is built above and keeps each cell's own,
        // possibly-empty text untouched.
        fill_span_sentinels(&mut layout_out);

        cells.sort_by(|a, b| {
            a.bbox
                .top
                .partial_cmp(&b.bbox.top)
                .unwrap()
                .then(a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap())
        });

        Ok(Table {
            bbox: region.bbox,
            header: layout.header,
            footer: layout.footer,
            cells,
            layout: layout_out,
        })
    }

    fn build_cell(&self, page: &PageView, region: &TableRegion, grid_bbox: BBox) -> WorkCell {
        let chars: Vec<&Char> = page
            .layout_chars()
            .filter(|c| cell_contains_char(&grid_bbox, c))
            .collect();

        let content: Vec<&&Char> = chars.iter().filter(|c| !c.is_space() && !c.is_dot()).collect();
        let bbox = if content.is_empty() {
            grid_bbox
        } else {
            let x0 = content.iter().map(|c| c.bbox.x0).fold(f64::INFINITY, f64::min) - self.params.shrink_padding_x;
            let x1 = content.iter().map(|c| c.bbox.x1).fold(f64::NEG_INFINITY, f64::max) + self.params.shrink_padding_x;
            let top = content.iter().map(|c| c.bbox.top).fold(f64::INFINITY, f64::min) - self.params.shrink_padding_y;
            let bottom = content.iter().map(|c| c.bbox.bottom).fold(f64::NEG_INFINITY, f64::max) + self.params.shrink_padding_y;
            BBox::new(x0.max(grid_bbox.x0), top.max(grid_bbox.top), x1.min(grid_bbox.x1), bottom.min(grid_bbox.bottom))
        };

        let text = extract_cell_text(&chars, &self.params);
        let font = content.first().map(|c| c.fontname.clone());
        let has_letters = content.iter().any(|c| c.text.chars().any(|ch| ch.is_alphabetic()));
        let crossed_by_dot_line = region
            .lines
            .iter()
            .any(|l| l.dot_line && l.top > grid_bbox.top - 0.01 && l.top < grid_bbox.bottom + 0.01 && l.x0 < grid_bbox.x1 && l.x1 > grid_bbox.x0);

        WorkCell { grid_bbox, bbox, text, font, has_letters, crossed_by_dot_line }
    }
}

fn cell_contains_char(bbox: &BBox, c: &Char) -> bool {
    let cx = (c.bbox.x0 + c.bbox.x1) / 2.0;
    let cy = (c.bbox.top + c.bbox.bottom) / 2.0;
    bbox.x0 <= cx && cx < bbox.x1 + 0.01 && bbox.top <= cy && cy < bbox.bottom + 0.01
}

fn dot_residue_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:\s*\.\s*){2,}").unwrap())
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Joins a cell's characters into text, sorted reading order (top then
/// `x0`). A space is synthesized between consecutive characters on the same
/// visual line whenever their horizontal gap exceeds `params.word_space_gap`
/// (spec §8 scenario 3: a currency symbol separated from its amount by a gap
/// wide enough to pass the column-separator test, but suppressed there by
/// the currency exception, still reads as two words in the cell text) and
/// between characters on different lines (newlines collapse to a space per
/// the §3 `Cell` invariant).
fn extract_cell_text(chars: &[&Char], params: &LayoutParams) -> String {
    let mut sorted: Vec<&&Char> = chars.iter().collect();
    sorted.sort_by(|a, b| {
        a.bbox
            .top
            .partial_cmp(&b.bbox.top)
            .unwrap()
            .then(a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap())
    });
    let mut raw = String::new();
    let mut prev: Option<&&Char> = None;
    for c in sorted {
        if let Some(p) = prev {
            let same_line = p.bbox.top < c.bbox.bottom && c.bbox.top < p.bbox.bottom;
            let gap = c.bbox.x0 - p.bbox.x1;
            if !same_line || gap > params.word_space_gap {
                raw.push(' ');
            }
        }
        if c.text == "\n" {
            raw.push(' ');
        } else {
            raw.push_str(&c.text);
        }
        prev = Some(c);
    }
    let collapsed = dot_residue_re().replace_all(&raw, " ");
    let collapsed = whitespace_re().replace_all(&collapsed, " ");
    collapsed.trim().to_string()
}

/// Back-fills each empty cell in the `layout` grid with the last non-empty
/// text to its left in the same row, so a header spanning several grid
/// columns (merged visually, but never coalesced into one `Cell`) reads as
/// repeated text rather than blanks when export flattens a row (spec §4.3
/// step 6). Operates in place on `layout`, not on the flat `cells` list.
fn fill_span_sentinels(layout: &mut [Vec<Cell>]) {
    for row in layout.iter_mut() {
        let mut last: Option<String> = None;
        for cell in row.iter_mut() {
            if cell.text.trim().is_empty() {
                if let Some(prev) = &last {
                    cell.text = prev.clone();
                }
            } else {
                last = Some(cell.text.clone());
            }
        }
    }
}

/// Header-row merge (spec §4.3 step 3): while the topmost row ends above
/// `header` and the next row has the same non-null cell count with no
/// ruling line between them, fold the two rows together.
fn merge_header_rows(grid: &mut Vec<Vec<WorkCell>>, header: f64, region_lines: &[super::geometry::RuleLine]) {
    loop {
        if grid.len() < 2 {
            break;
        }
        let row0_bottom = row_bottom(&grid[0]);
        if row0_bottom >= header {
            break;
        }
        let non_null = |row: &[WorkCell]| row.iter().filter(|c| !c.text.trim().is_empty()).count();
        if non_null(&grid[0]) != non_null(&grid[1]) {
            break;
        }
        let row1_top = row_top(&grid[1]);
        if region_lines.iter().any(|l| !l.dot_line && l.top > row0_bottom - 0.01 && l.top < row1_top + 0.01) {
            break;
        }

        let row1 = grid.remove(1);
        for (c0, c1) in grid[0].iter_mut().zip(row1.into_iter()) {
            if !c1.text.trim().is_empty() {
                c0.text = if c0.text.trim().is_empty() {
                    c1.text
                } else {
                    format!("{} {}", c0.text, c1.text)
                };
            }
            c0.bbox = c0.bbox.union(&c1.bbox);
            c0.grid_bbox = c0.grid_bbox.union(&c1.grid_bbox);
        }
    }
}

fn row_top(row: &[WorkCell]) -> f64 {
    row.iter().map(|c| c.grid_bbox.top).fold(f64::INFINITY, f64::min)
}

fn row_bottom(row: &[WorkCell]) -> f64 {
    row.iter().map(|c| c.grid_bbox.bottom).fold(f64::NEG_INFINITY, f64::max)
}

fn only_first_column_populated(row: &[WorkCell]) -> bool {
    !row.is_empty() && !row[0].text.trim().is_empty() && row[1..].iter().all(|c| c.text.trim().is_empty())
}

fn only_non_first_column_populated(row: &[WorkCell]) -> bool {
    row.len() > 1
        && row[0].text.trim().is_empty()
        && row[1..].iter().any(|c| !c.text.trim().is_empty())
}

/// Whether merging `upper` into `lower` (or vice versa) is blocked by one of
/// the continuation-row guard conditions shared by spec §4.3 steps 4 and 5.
fn continuation_blocked(upper: &[WorkCell], lower: &[WorkCell], col: usize, region: &TableRegion, params: &LayoutParams) -> bool {
    let prev_text = upper[col].text.trim();
    if prev_text.ends_with(':') {
        return true;
    }

    let candidate = &lower[col];
    let width = candidate.grid_bbox.width();
    if width > 0.0 && !candidate.text.trim().is_empty() {
        let text_bbox = candidate.bbox;
        let leading = text_bbox.x0 - candidate.grid_bbox.x0;
        let trailing = candidate.grid_bbox.x1 - text_bbox.x1;
        if (leading - trailing).abs() < params.continuation_center_tolerance * width {
            return true;
        }
    }

    if candidate.crossed_by_dot_line {
        return true;
    }

    if !candidate.text.trim().is_empty() && !candidate.has_letters {
        return true;
    }

    if upper[col].font.is_some() && candidate.font.is_some() && upper[col].font != candidate.font {
        return true;
    }

    let gap = candidate.grid_bbox.top - row_bottom(upper);
    if gap > params.continuation_gap_multiplier * params.max_charspace {
        return true;
    }

    let upper_bottom = row_bottom(upper);
    let lower_top = row_top(lower);
    if region.lines.iter().any(|l| !l.dot_line && l.top > upper_bottom - 0.01 && l.top < lower_top + 0.01) {
        return true;
    }

    false
}

fn merge_row_into(upper: &mut Vec<WorkCell>, lower: Vec<WorkCell>) {
    for (c0, c1) in upper.iter_mut().zip(lower.into_iter()) {
        if !c1.text.trim().is_empty() {
            c0.text = if c0.text.trim().is_empty() {
                c1.text
            } else {
                format!("{} {}", c0.text, c1.text)
            };
        }
        c0.bbox = c0.bbox.union(&c1.bbox);
        c0.grid_bbox = c0.grid_bbox.union(&c1.grid_bbox);
        c0.has_letters = c0.has_letters || c1.has_letters;
    }
}

/// First-column continuation merge (spec §4.3 step 4): a row populated only
/// in column 0 is folded into the row above it unless one of the guard
/// conditions holds.
fn merge_first_column_continuations(grid: &mut Vec<Vec<WorkCell>>, region: &TableRegion, params: &LayoutParams) {
    let mut i = 1;
    while i < grid.len() {
        if only_first_column_populated(&grid[i]) && !continuation_blocked(&grid[i - 1], &grid[i], 0, region, params) {
            let row = grid.remove(i);
            merge_row_into(&mut grid[i - 1], row);
        } else {
            i += 1;
        }
    }
}

/// Second-column continuation merge (spec §4.3 step 5): a row populated in
/// every column except 0 is folded into the row above it under the same
/// guards, checked against the first populated column.
fn merge_second_column_continuations(grid: &mut Vec<Vec<WorkCell>>, region: &TableRegion, params: &LayoutParams) {
    let mut i = 1;
    while i < grid.len() {
        if only_non_first_column_populated(&grid[i]) {
            let col = grid[i].iter().position(|c| !c.text.trim().is_empty()).unwrap_or(1);
            if !continuation_blocked(&grid[i - 1], &grid[i], col, region, params) {
                let row = grid.remove(i);
                merge_row_into(&mut grid[i - 1], row);
                continue;
            }
        }
        i += 1;
    }
}
