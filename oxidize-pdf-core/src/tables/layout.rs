//! `LayoutExtractor`: derives column/row separators and the header/footer
//! baselines for one `TableRegion` (spec §4.2).

use std::sync::OnceLock;

use regex::Regex;

use super::error::{Result, TableError};
use super::finder::TableRegion;
use super::geometry::{BBox, Char, CropResult, PageView, RuleLine};
use super::params::LayoutParams;

const BEFORE_SYMBOLS: &[&str] = &["$", "€", "¥", "£", "₤"];
const AFTER_SYMBOLS: &[&str] = &["%"];

fn is_before_symbol(s: &str) -> bool {
    BEFORE_SYMBOLS.contains(&s)
}

fn is_after_symbol(s: &str) -> bool {
    AFTER_SYMBOLS.contains(&s)
}

fn footnote_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\(\d+\)|\*|\d+\.|\d+\)|\d+|•|cid:127|\([a-z]\))$").unwrap())
}

/// A vertical (column) separator, with the y-extent it spans.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSeparator {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
}

/// A horizontal (row) separator, with the x-extent it spans.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSeparator {
    pub y: f64,
    pub x0: f64,
    pub x1: f64,
}

/// The separators and baselines produced for one region. Not retained on
/// the final `Table`: only the grid they produce matters past this point
/// (spec §3 ownership note).
#[derive(Debug, Clone)]
pub struct Layout {
    pub columns: Vec<ColumnSeparator>,
    pub rows: Vec<RowSeparator>,
    pub header: f64,
    pub footer: f64,
}

#[derive(Debug, Default)]
pub struct LayoutExtractor {
    params: LayoutParams,
}

impl LayoutExtractor {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    /// Produces the layout for `region`, refining its header/footer and
    /// bbox in the process (top-trimming can shrink the bbox's top edge;
    /// the bottom edge is left alone so a trailing footnote stays inside
    /// the region per the `TableRegion` contract).
    pub fn extract(&self, region: &TableRegion, page: &PageView) -> Result<(TableRegion, Layout)> {
        let cropped = match page.crop(region.bbox) {
            CropResult::Ok(view) => view,
            CropResult::EmptyBand | CropResult::OutOfBounds => {
                return Err(TableError::DegenerateRegion("region crop produced no content".into()))
            }
        };

        let mut chars: Vec<&Char> = cropped.layout_chars().filter(|c| !c.is_space()).collect();
        chars.sort_by(|a, b| a.bbox.top.partial_cmp(&b.bbox.top).unwrap());

        let (gap_rows, font_header) = find_rows(&chars, region.bbox.x0, region.bbox.x1, &self.params);
        let header_fallback = font_header.unwrap_or_else(|| header_from_rulings(region, &self.params));

        let (new_top, header, new_footer) =
            trim_top_and_bottom(&cropped, region.bbox, header_fallback, font_header.is_some(), &self.params);

        let region_bbox = BBox::new(region.bbox.x0, new_top, region.bbox.x1, region.bbox.bottom);

        let segments = horizontal_segments(region, region_bbox, header, new_footer);
        let mut columns = Vec::new();
        for (seg_top, seg_bottom) in &segments {
            let band_chars: Vec<&Char> = chars
                .iter()
                .filter(|c| c.bbox.top < *seg_bottom && c.bbox.bottom > *seg_top)
                .copied()
                .collect();
            let xs = find_columns_band(&band_chars, true, &self.params);
            for x in xs {
                let top = extend_top_of_column(x, *seg_top, region_bbox, &region.lines, &chars, header);
                columns.push(ColumnSeparator { x, top, bottom: *seg_bottom });
            }
        }
        columns.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
        columns = remove_unnecessary_columns(columns, &chars);

        if columns.is_empty() {
            return Err(TableError::DegenerateRegion("no column separators found".into()));
        }

        let mut rows: Vec<RowSeparator> = gap_rows
            .into_iter()
            .filter(|r| r.y > header + 0.01 && r.y < new_footer - 0.01)
            .collect();
        for line in &region.lines {
            if line.top > header + 0.01 && line.top < new_footer - 0.01 {
                rows.push(RowSeparator { y: line.top, x0: line.x0, x1: line.x1 });
            }
        }
        rows.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap());
        dedup_sorted(&mut rows, |a, b| (a.y - b.y).abs() < 0.01);

        let mut result_region = region.clone();
        result_region.bbox = region_bbox;
        result_region.header = header;
        result_region.footer = new_footer;

        let layout = Layout { columns, rows, header, footer: new_footer };
        Ok((result_region, layout))
    }
}

fn dedup_sorted<T>(items: &mut Vec<T>, same: impl Fn(&T, &T) -> bool) {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        if let Some(last) = out.last() {
            if same(last, &item) {
                continue;
            }
        }
        out.push(item);
    }
    *items = out;
}

/// Row separators and the font-change header baseline (spec §4.2.1).
fn find_rows(chars: &[&Char], region_x0: f64, region_x1: f64, params: &LayoutParams) -> (Vec<RowSeparator>, Option<f64>) {
    let mut rows = Vec::new();
    let mut header = None;
    for pair in chars.windows(2) {
        let gap = pair[1].bbox.top - pair[0].bbox.bottom;
        if gap > params.max_linespace {
            let y = (pair[0].bbox.bottom + pair[1].bbox.top) / 2.0;
            if header.is_none() && pair[0].fontname != pair[1].fontname {
                header = Some(y);
            }
            rows.push(RowSeparator { y, x0: region_x0, x1: region_x1 });
        }
    }
    (rows, header)
}

/// Ruling-line fallback for the header baseline when no font change was
/// found (spec §4.2.1 step 4). Interpreting the spec's open question: the
/// fallback only ever widens the candidate pool when no better evidence
/// exists, so it is only reached when `find_rows` produced no font header.
fn header_from_rulings(region: &TableRegion, params: &LayoutParams) -> f64 {
    let height = region.bbox.height();
    if height <= 0.0 {
        return region.bbox.top;
    }
    let candidates: Vec<&RuleLine> = region
        .lines
        .iter()
        .filter(|l| !l.dot_line)
        .filter(|l| (l.top - region.bbox.top) > params.header_fallback_min_top_fraction * height)
        .filter(|l| (region.bbox.bottom - l.top) > 0.10 * height)
        .filter(|l| l.width >= params.header_fallback_min_width_fraction * region.bbox.width())
        .collect();

    match candidates
        .into_iter()
        .max_by(|a, b| {
            a.width
                .partial_cmp(&b.width)
                .unwrap()
                .then(a.segments.len().cmp(&b.segments.len()))
        }) {
        Some(line) => line.top,
        None => region.bbox.top,
    }
}

/// Column separators for one horizontal band (spec §4.2.2). When
/// `symbol_sensitive` is false (used by the top/bottom trimming pass),
/// currency/percent exceptions and the font-change trigger are disabled.
fn find_columns_band(chars: &[&Char], symbol_sensitive: bool, params: &LayoutParams) -> Vec<f64> {
    let mut sorted: Vec<&&Char> = chars
        .iter()
        .filter(|c| !matches!(c.text.as_str(), " " | "." | "\n" | "\t"))
        .collect();
    sorted.sort_by(|a, b| a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap());

    let mut seps = Vec::new();
    for pair in sorted.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if left.text == "-" || right.text == "-" {
            continue;
        }
        let gap = right.bbox.x0 - left.bbox.x1;
        let mut emit = gap > params.max_charspace
            || (gap > params.font_change_gap_threshold && left.fontname != right.fontname);

        if symbol_sensitive {
            if is_before_symbol(&left.text) && !is_before_symbol(&right.text) {
                emit = false;
            }
            if is_after_symbol(&right.text) {
                emit = false;
            }
            if !emit && gap > 1.0 {
                if is_before_symbol(&right.text) && !is_before_symbol(&left.text) {
                    emit = true;
                }
                if is_after_symbol(&left.text) && !is_after_symbol(&right.text) {
                    emit = true;
                }
            }
        }

        if emit {
            seps.push(right.bbox.x0 - gap / 2.0);
        }
    }
    seps
}

/// Extends a column separator upward until it is blocked by a character or
/// a narrow ruling (spec §4.2.2 `extend_top_of_column`).
fn extend_top_of_column(x: f64, band_top: f64, region: BBox, region_lines: &[RuleLine], chars_above_region: &[&Char], header: f64) -> f64 {
    let strip_x0 = x - 1.0;
    let strip_x1 = x + 1.0;
    let mut blocker = region.top;

    for c in chars_above_region {
        if c.bbox.bottom <= band_top + 0.01 && c.bbox.x1 > strip_x0 && c.bbox.x0 < strip_x1 {
            blocker = blocker.max(c.bbox.bottom);
        }
    }
    for l in region_lines {
        if l.top < header - 2.0
            && l.width < 0.9 * region.width()
            && l.bottom <= band_top + 0.01
            && l.x1 > strip_x0
            && l.x0 < strip_x1
        {
            blocker = blocker.max(l.bottom);
        }
    }
    blocker
}

/// Drops redundant adjacent columns whose intervening strip is pure
/// whitespace (spec §4.2.4).
fn remove_unnecessary_columns(mut cols: Vec<ColumnSeparator>, chars: &[&Char]) -> Vec<ColumnSeparator> {
    let mut i = 0;
    while i + 1 < cols.len() {
        let a = cols[i].clone();
        let b = cols[i + 1].clone();
        let overlap = a.bottom.min(b.bottom) - a.top.max(b.top);
        if overlap > 2.0 {
            let margin = 1.0;
            let has_text_between = chars
                .iter()
                .any(|c| c.bbox.x0 > a.x + margin && c.bbox.x1 < b.x - margin && !c.is_space());
            if !has_text_between {
                let a_len = a.bottom - a.top;
                let b_len = b.bottom - b.top;
                if a_len <= b_len {
                    if b.top <= a.top && a.bottom <= b.bottom {
                        cols.remove(i);
                        continue;
                    } else {
                        cols[i].top = b.top;
                        cols[i].bottom = b.bottom;
                    }
                } else if a.top <= b.top && b.bottom <= a.bottom {
                    cols.remove(i + 1);
                    continue;
                } else {
                    cols[i + 1].top = a.top;
                    cols[i + 1].bottom = a.bottom;
                }
            }
        }
        i += 1;
    }
    cols
}

fn leading_trailing(chars: &[&Char], region: &BBox) -> (f64, f64) {
    if chars.is_empty() {
        return (region.width(), region.width());
    }
    let min_x0 = chars.iter().map(|c| c.bbox.x0).fold(f64::INFINITY, f64::min);
    let max_x1 = chars.iter().map(|c| c.bbox.x1).fold(f64::NEG_INFINITY, f64::max);
    (min_x0 - region.x0, region.x1 - max_x1)
}

/// Classification of a candidate band during top/bottom trimming (spec
/// §4.2.3).
enum BandVerdict {
    /// Decorative or centred caption / a footnote marker line: strip it and
    /// keep scanning further inward.
    Strip,
    /// Genuine table content: stop trimming at this band.
    Stop,
}

fn classify_band(band_chars: &[&Char], region: &BBox, params: &LayoutParams) -> BandVerdict {
    if band_chars.is_empty() {
        return BandVerdict::Strip;
    }
    let width = region.width();
    if width <= 0.0 {
        return BandVerdict::Stop;
    }
    let xs = find_columns_band(band_chars, false, params);
    let (leading, trailing) = leading_trailing(band_chars, region);

    if xs.is_empty() {
        if leading < params.caption_leading_fraction * width {
            return BandVerdict::Strip;
        }
        let full_width_blank = leading < 0.01 * width && trailing < 0.01 * width;
        if !full_width_blank && (leading - trailing).abs() < params.caption_center_tolerance * width {
            return BandVerdict::Strip;
        }
        return BandVerdict::Stop;
    }

    if xs.len() == 1 && leading < params.caption_leading_fraction * width {
        let split_x = xs[0];
        let first_word: String = band_chars
            .iter()
            .filter(|c| c.bbox.x1 <= split_x)
            .map(|c| c.text.as_str())
            .collect();
        if footnote_marker_re().is_match(first_word.trim()) {
            return BandVerdict::Strip;
        }
    }
    BandVerdict::Stop
}

/// Peels decorative/footnote bands off the top and bottom of the region
/// (spec §4.2.3). Returns the trimmed top edge, the final header baseline,
/// and the final footer baseline.
fn trim_top_and_bottom(page: &PageView, region_bbox: BBox, header_fallback: f64, had_font_header: bool, params: &LayoutParams) -> (f64, f64, f64) {
    let mut chars: Vec<&Char> = page.layout_chars().filter(|c| !c.is_space()).collect();
    chars.sort_by(|a, b| a.bbox.top.partial_cmp(&b.bbox.top).unwrap());

    // Build bands from consecutive row gaps using the same threshold as
    // `find_rows`, bounded by the region's own top/bottom.
    let mut boundaries = vec![region_bbox.top];
    for pair in chars.windows(2) {
        let gap = pair[1].bbox.top - pair[0].bbox.bottom;
        if gap > params.max_linespace {
            boundaries.push((pair[0].bbox.bottom + pair[1].bbox.top) / 2.0);
        }
    }
    boundaries.push(region_bbox.bottom);
    boundaries.dedup_by(|a, b| (*a - *b).abs() < 0.01);

    let bands: Vec<(f64, f64)> = boundaries.windows(2).map(|w| (w[0], w[1])).collect();
    if bands.is_empty() {
        return (region_bbox.top, header_fallback, region_bbox.bottom);
    }

    let band_chars = |top: f64, bottom: f64| -> Vec<&Char> {
        chars
            .iter()
            .filter(|c| c.bbox.top < bottom - 0.001 && c.bbox.bottom > top + 0.001)
            .copied()
            .collect()
    };

    let mut top_idx = 0usize;
    if !had_font_header {
        while top_idx + 1 < bands.len() {
            let (t, b) = bands[top_idx];
            match classify_band(&band_chars(t, b), &region_bbox, params) {
                BandVerdict::Strip => top_idx += 1,
                BandVerdict::Stop => break,
            }
        }
    }
    let new_top = bands[top_idx].0;
    // When no font header exists, the header baseline is simply the top of
    // the first real-content band; otherwise the font-change baseline
    // found by `find_rows` stands.
    let header = if had_font_header { header_fallback } else { new_top };

    let mut bottom_idx = bands.len() - 1;
    while bottom_idx > top_idx {
        let (t, b) = bands[bottom_idx];
        match classify_band(&band_chars(t, b), &region_bbox, params) {
            BandVerdict::Strip => {
                if bottom_idx == 0 {
                    break;
                }
                bottom_idx -= 1;
            }
            BandVerdict::Stop => break,
        }
    }
    let new_footer = bands[bottom_idx].1;

    (new_top, header, new_footer.max(header))
}

/// Slices the region into y-bands for independent column detection (spec
/// §4.2.5): bounded by the region top, every ruling above the header, the
/// header, the footer, and the region bottom.
fn horizontal_segments(region: &TableRegion, region_bbox: BBox, header: f64, footer: f64) -> Vec<(f64, f64)> {
    let mut boundaries: Vec<f64> = vec![region_bbox.top];
    for line in &region.lines {
        if line.top < header - 0.01 {
            boundaries.push(line.top);
        }
    }
    boundaries.push(header);
    boundaries.push(footer);
    boundaries.push(region_bbox.bottom);
    boundaries.sort_by(|a, b| a.partial_cmp(b).unwrap());
    boundaries.dedup_by(|a, b| (*a - *b).abs() < 0.01);
    boundaries.windows(2).map(|w| (w[0], w[1])).filter(|(a, b)| b > a).collect()
}
