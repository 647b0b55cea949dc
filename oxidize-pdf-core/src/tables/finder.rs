//! `TableFinder`: locates table regions on a page from ruling-line evidence
//! and character layout (spec §4.1).
//!
//! The finder never fails: a page with no rulings and no characters simply
//! produces an empty region list (spec §7 `EmptyPage`).

use super::geometry::{BBox, Char, PageView, Rect, RuleLine};
use super::params::LayoutParams;

/// A candidate table region: its bbox, the rulings found inside it, and a
/// header/footer baseline that starts out equal to the bbox edges and is
/// refined later by the `LayoutExtractor`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRegion {
    pub bbox: BBox,
    pub lines: Vec<RuleLine>,
    pub header: f64,
    pub footer: f64,
}

impl TableRegion {
    fn new(bbox: BBox, line: RuleLine) -> Self {
        let header = bbox.top;
        let footer = bbox.bottom;
        Self {
            bbox,
            lines: vec![line],
            header,
            footer,
        }
    }
}

/// Locates table regions within a page view.
#[derive(Debug, Default)]
pub struct TableFinder {
    params: LayoutParams,
}

impl TableFinder {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    /// Finds all table regions on `page`. Never fails: returns an empty
    /// `Vec` when there is no content or no rulings to anchor a region.
    pub fn find(&self, page: &PageView) -> Vec<TableRegion> {
        if page.chars.is_empty() {
            return Vec::new();
        }

        let all_lines = prepare_lines(page, &self.params);
        if all_lines.is_empty() {
            return Vec::new();
        }

        let layout = classify_page_layout(page, &self.params);
        let threshold = line_threshold(page);

        let mut regions = Vec::with_capacity(all_lines.len());
        for line in &all_lines {
            if layout.two_column && line.width > layout.text_span / 2.0 {
                // In a two-column page, a ruling wider than half the text
                // span usually underlines a section title spanning both
                // columns rather than delimiting a table.
                continue;
            }
            if let Some(region) = grow_region(page, line.clone(), threshold, &layout, &self.params) {
                regions.push(region);
            }
        }

        merge_regions(regions, &self.params)
    }
}

struct PageLayout {
    mid: f64,
    two_column: bool,
    text_span: f64,
}

/// Classifies the page as single- or two-column (spec §4.1.2).
fn classify_page_layout(page: &PageView, params: &LayoutParams) -> PageLayout {
    let chars: Vec<&Char> = page.layout_chars().filter(|c| !c.is_space()).collect();
    if chars.is_empty() {
        return PageLayout {
            mid: page.bbox.x0,
            two_column: false,
            text_span: 0.0,
        };
    }
    let left = chars.iter().map(|c| c.bbox.x0).fold(f64::INFINITY, f64::min);
    let right = chars.iter().map(|c| c.bbox.x1).fold(f64::NEG_INFINITY, f64::max);
    let mid = (left + right) / 2.0;
    let text_span = right - left;

    let strip = BBox::new(mid, page.bbox.top, mid + params.mid_strip_width, page.bbox.bottom);
    let strip_height: f64 = chars
        .iter()
        .filter(|c| strip.overlaps_x(&c.bbox))
        .map(|c| c.bbox.height())
        .sum();

    let two_column = page.bbox.height() > 0.0
        && strip_height < params.two_column_height_fraction * page.bbox.height();

    PageLayout { mid, two_column, text_span }
}

/// The mode of positive vertical gaps between consecutive characters sorted
/// by `bottom` (spec §4.1.3). Gaps are bucketed to 1 decimal place so that
/// floating-point jitter from the decoder doesn't scatter an otherwise
/// dominant line-spacing value across many buckets.
fn line_threshold(page: &PageView) -> f64 {
    let mut chars: Vec<&Char> = page.layout_chars().filter(|c| !c.is_space()).collect();
    if chars.len() < 2 {
        return 0.0;
    }
    chars.sort_by(|a, b| a.bbox.bottom.partial_cmp(&b.bbox.bottom).unwrap());

    use std::collections::HashMap;
    let mut buckets: HashMap<i64, (f64, usize)> = HashMap::new();
    for pair in chars.windows(2) {
        let gap = pair[1].bbox.bottom - pair[0].bbox.bottom;
        if gap > 0.0 {
            let key = (gap * 10.0).round() as i64;
            let entry = buckets.entry(key).or_insert((gap, 0));
            entry.1 += 1;
        }
    }
    buckets
        .values()
        .max_by_key(|(_, count)| *count)
        .map(|(gap, _)| *gap)
        .unwrap_or(0.0)
}

/// Rectangles/curves with `height < rect_collapse_max_height` that are
/// filled become synthetic horizontal ruling lines (spec §4.1.1.1).
fn collapse_rects_and_curves(page: &PageView, params: &LayoutParams) -> Vec<RuleLine> {
    let mut out = Vec::new();
    for rect in &page.rects {
        if rect.filled && rect.bbox.height() < params.rect_collapse_max_height && rect.bbox.width() > 0.0 {
            out.push(RuleLine::new(rect.bbox.x0, rect.bbox.x1, rect.bbox.top, rect.bbox.bottom));
        }
    }
    for curve in &page.curves {
        if curve.filled && curve.bbox.height() < params.rect_collapse_max_height && curve.bbox.width() > 0.0 {
            out.push(RuleLine::new(curve.bbox.x0, curve.bbox.x1, curve.bbox.top, curve.bbox.bottom));
        }
    }
    out
}

/// Builds `all_lines`: concatenated rulings plus synthetic dot-leader lines,
/// sorted by `top` (spec §4.1.1 steps 1-5).
fn prepare_lines(page: &PageView, params: &LayoutParams) -> Vec<RuleLine> {
    let mut candidates: Vec<RuleLine> = page
        .lines
        .iter()
        .filter(|l| l.x0 < l.x1 && page.bbox.contains(&l.as_bbox()))
        .cloned()
        .collect();
    candidates.extend(collapse_rects_and_curves(page, params));
    candidates.sort_by(|a, b| a.top.partial_cmp(&b.top).unwrap());

    // Discard lines sitting exactly on the page's top or left margin: these
    // are almost always page borders, not table rulings.
    candidates.retain(|l| l.top > page.bbox.top + 0.5 && l.x0 >= page.bbox.x0 - 0.5);

    let concatenated = concatenate_collinear(candidates);
    let segmented = build_segmented_lines(concatenated);

    let mut all_lines = segmented;
    all_lines.extend(dot_leader_lines(page, params));
    all_lines.sort_by(|a, b| a.top.partial_cmp(&b.top).unwrap());
    all_lines
}

/// Concatenates collinear ruling fragments: same `top`, and the second
/// fragment's `x0 <= first's x1`, extending the line to the right.
fn concatenate_collinear(mut lines: Vec<RuleLine>) -> Vec<RuleLine> {
    lines.sort_by(|a, b| {
        a.top
            .partial_cmp(&b.top)
            .unwrap()
            .then(a.x0.partial_cmp(&b.x0).unwrap())
    });
    let mut out: Vec<RuleLine> = Vec::new();
    for line in lines {
        if let Some(last) = out.last_mut() {
            if (last.top - line.top).abs() < 0.5 && line.x0 <= last.x1 + 0.01 {
                last.x1 = last.x1.max(line.x1);
                last.bottom = last.bottom.max(line.bottom);
                last.width = last.x1 - last.x0;
                last.segments.extend(line.segments.iter().copied());
                continue;
            }
        }
        out.push(line);
    }
    out
}

/// Second pass: merges lines sharing the same `top` into one record whose
/// `width` spans endpoint-to-endpoint, retaining the original fragments as
/// `segments` (used as a header-selection tiebreaker).
fn build_segmented_lines(lines: Vec<RuleLine>) -> Vec<RuleLine> {
    use std::collections::BTreeMap;
    // Key on a rounded top so near-identical rulings coalesce; BTreeMap
    // keeps the output naturally sorted by top.
    let mut groups: BTreeMap<i64, Vec<RuleLine>> = BTreeMap::new();
    for line in lines {
        let key = (line.top * 100.0).round() as i64;
        groups.entry(key).or_default().push(line);
    }
    let mut out = Vec::with_capacity(groups.len());
    for (_, group) in groups {
        let x0 = group.iter().map(|l| l.x0).fold(f64::INFINITY, f64::min);
        let x1 = group.iter().map(|l| l.x1).fold(f64::NEG_INFINITY, f64::max);
        let top = group.iter().map(|l| l.top).fold(f64::INFINITY, f64::min);
        let bottom = group.iter().map(|l| l.bottom).fold(f64::NEG_INFINITY, f64::max);
        let mut segments: Vec<(f64, f64)> = group.iter().flat_map(|l| l.segments.iter().copied()).collect();
        segments.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        out.push(RuleLine {
            x0,
            x1,
            top,
            bottom,
            width: x1 - x0,
            segments,
            dot_line: false,
        });
    }
    out
}

/// Scans for runs of more than `dot_leader_min_dots` period glyphs at the
/// same baseline and turns each run into a synthetic `RuleLine` with
/// `dot_line = true` (spec §4.1.1.4).
fn dot_leader_lines(page: &PageView, params: &LayoutParams) -> Vec<RuleLine> {
    use std::collections::BTreeMap;
    let mut by_top: BTreeMap<i64, Vec<&Char>> = BTreeMap::new();
    for c in page.layout_chars().filter(|c| c.is_dot()) {
        let key = (c.bbox.top * 10.0).round() as i64;
        by_top.entry(key).or_default().push(c);
    }

    let mut out = Vec::new();
    for (_, mut dots) in by_top {
        dots.sort_by(|a, b| a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap());
        let mut run: Vec<&Char> = Vec::new();
        let mut flush = |run: &mut Vec<&Char>, out: &mut Vec<RuleLine>| {
            if run.len() > params.dot_leader_min_dots {
                let x0 = run.first().unwrap().bbox.x0;
                let x1 = run.last().unwrap().bbox.x1;
                let top = run.iter().map(|c| c.bbox.top).fold(f64::INFINITY, f64::min);
                let bottom = run.iter().map(|c| c.bbox.bottom).fold(f64::NEG_INFINITY, f64::max);
                out.push(RuleLine::dot_leader(x0, x1, top, bottom));
            }
            run.clear();
        };
        for dot in dots {
            if let Some(last) = run.last() {
                if dot.bbox.x0 - last.bbox.x1 > params.dot_leader_gap {
                    flush(&mut run, &mut out);
                }
            }
            run.push(dot);
        }
        flush(&mut run, &mut out);
    }
    out
}

/// Downward scan from a strip below a ruling: walk characters sorted by
/// `bottom`, accepting each whose `top - previous.bottom <= threshold`;
/// return the bottom of the last accepted character (spec §4.1.4
/// `find_table_bottom`). Spaces are skipped, never counted as a gap-breaker.
fn find_table_bottom(chars_below: &[&Char], threshold: f64, start: f64) -> f64 {
    let mut sorted: Vec<&&Char> = chars_below.iter().filter(|c| !c.is_space()).collect();
    sorted.sort_by(|a, b| a.bbox.bottom.partial_cmp(&b.bbox.bottom).unwrap());
    let mut last_bottom = start;
    for c in sorted {
        if c.bbox.top - last_bottom > threshold {
            break;
        }
        last_bottom = last_bottom.max(c.bbox.bottom);
    }
    last_bottom
}

/// Symmetric upward scan (spec §4.1.4 `find_table_top`).
fn find_table_top(chars_above: &[&Char], threshold: f64, start: f64) -> f64 {
    let mut sorted: Vec<&&Char> = chars_above.iter().filter(|c| !c.is_space()).collect();
    sorted.sort_by(|a, b| b.bbox.top.partial_cmp(&a.bbox.top).unwrap());
    let mut last_top = start;
    for c in sorted {
        if last_top - c.bbox.bottom > threshold {
            break;
        }
        last_top = last_top.min(c.bbox.top);
    }
    last_top
}

fn find_table_horizontal(
    chars_in_band: &[&Char],
    start_x0: f64,
    start_x1: f64,
    left_threshold: f64,
    right_threshold: f64,
) -> (f64, f64) {
    let mut chars: Vec<&&Char> = chars_in_band.iter().filter(|c| !c.is_space()).collect();
    chars.sort_by(|a, b| a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap());

    let mut left = start_x0;
    for c in chars.iter().rev().filter(|c| c.bbox.x1 <= start_x0 + 0.01) {
        if left - c.bbox.x1 > left_threshold {
            break;
        }
        left = left.min(c.bbox.x0);
    }
    let mut right = start_x1;
    for c in chars.iter().filter(|c| c.bbox.x0 >= start_x1 - 0.01) {
        if c.bbox.x0 - right > right_threshold {
            break;
        }
        right = right.max(c.bbox.x1);
    }
    (left, right)
}

/// Whether a strip at `mid` within `[top, bottom]` is populated enough that
/// the candidate region should be treated as full width rather than
/// confined to one column (spec §4.1.4 one-column test).
fn mid_strip_populated(page: &PageView, layout: &PageLayout, top: f64, bottom: f64, params: &LayoutParams) -> bool {
    let strip = BBox::new(layout.mid, top, layout.mid + params.mid_strip_width, bottom);
    let chars_in_strip: Vec<&Char> = page
        .layout_chars()
        .filter(|c| strip.overlaps(&c.bbox))
        .collect();
    let lines_in_strip = page.lines.iter().filter(|l| strip.overlaps(&l.as_bbox())).count();
    if chars_in_strip.len() >= 2 || lines_in_strip >= 1 {
        return true;
    }
    let height: f64 = chars_in_strip.iter().map(|c| c.bbox.height()).sum();
    page.bbox.height() > 0.0 && height > params.one_column_height_fraction * page.bbox.height()
}

/// Grows a single ruling line into a full table region by iterating the
/// top/bottom/left/right extension to a fixpoint (spec §4.1.4
/// `extend_table`). Bounded by the page's character count to guarantee
/// termination (spec §7).
fn grow_region(page: &PageView, line: RuleLine, threshold: f64, layout: &PageLayout, params: &LayoutParams) -> Option<TableRegion> {
    let mut top = line.top;
    let mut bottom = line.bottom.max(line.top);
    let mut x0 = line.x0;
    let mut x1 = line.x1;

    // `bottom_threshold` overrides the adaptive `line_threshold` for the
    // downward scan specifically; every other edge keeps using the adaptive
    // value or its own injected threshold.
    let bottom_threshold = params.bottom_threshold.unwrap_or(threshold);

    let max_iterations = page.chars.len().max(1) + 8;
    for _ in 0..max_iterations {
        let prev = (top, bottom, x0, x1);

        let below: Vec<&Char> = page.layout_chars().filter(|c| c.bbox.top >= bottom - 0.01).collect();
        let new_bottom = find_table_bottom(&below, bottom_threshold, bottom);

        let above: Vec<&Char> = page.layout_chars().filter(|c| c.bbox.bottom <= top + 0.01).collect();
        let new_top = find_table_top(&above, params.top_threshold, top);

        let full_width = mid_strip_populated(page, layout, new_top, new_bottom, params);
        let (new_x0, new_x1) = if full_width {
            (page.bbox.x0, page.bbox.x1)
        } else {
            let band: Vec<&Char> = page
                .layout_chars()
                .filter(|c| c.bbox.top < new_bottom && c.bbox.bottom > new_top)
                .collect();
            find_table_horizontal(&band, x0, x1, params.left_threshold, params.right_threshold)
        };

        top = new_top;
        bottom = new_bottom;
        x0 = new_x0;
        x1 = new_x1;

        if (top, bottom, x0, x1) == prev {
            break;
        }
    }

    if bottom <= top || x1 <= x0 {
        return None;
    }
    Some(TableRegion::new(BBox::new(x0, top, x1, bottom), line))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Classification {
    Disjoint,
    Encloses,
    Inside,
    Overlap,
}

fn classify(t: &BBox, b: &BBox) -> Classification {
    if !t.overlaps(b) {
        return Classification::Disjoint;
    }
    if b.contains(t) {
        return Classification::Encloses;
    }
    if t.contains(b) {
        return Classification::Inside;
    }
    Classification::Overlap
}

/// Extends `t` on exactly the sides where `b` protrudes, provided `b`'s
/// opposite side still lies inside `t` (an attached extension, not a
/// disjoint neighbour) (spec §4.1.5).
fn extend_on_protruding_sides(t: &mut BBox, b: &BBox) {
    if b.x0 < t.x0 && b.x1 > t.x0 {
        t.x0 = b.x0;
    }
    if b.x1 > t.x1 && b.x0 < t.x1 {
        t.x1 = b.x1;
    }
    if b.top < t.top && b.bottom > t.top {
        t.top = b.top;
    }
    if b.bottom > t.bottom && b.top < t.bottom {
        t.bottom = b.bottom;
    }
}

/// Greedily folds overlapping regions into each other (spec §4.1.5).
fn merge_regions(regions: Vec<TableRegion>, params: &LayoutParams) -> Vec<TableRegion> {
    let mut pending = regions;
    let mut merged = Vec::new();

    while let Some(mut current) = pending.first().cloned() {
        pending.remove(0);
        loop {
            let mut folded_any = false;
            let mut remaining = Vec::with_capacity(pending.len());
            for candidate in pending.drain(..) {
                match classify(&current.bbox, &candidate.bbox) {
                    Classification::Disjoint => remaining.push(candidate),
                    Classification::Encloses => {
                        let mut lines = candidate.lines.clone();
                        lines.extend(current.lines.clone());
                        current.bbox = candidate.bbox;
                        current.lines = lines;
                        folded_any = true;
                    }
                    Classification::Inside => {
                        current.lines.extend(candidate.lines.clone());
                        folded_any = true;
                    }
                    Classification::Overlap => {
                        extend_on_protruding_sides(&mut current.bbox, &candidate.bbox);
                        current.lines.extend(candidate.lines.clone());
                        folded_any = true;
                    }
                }
            }
            pending = remaining;
            if !folded_any {
                break;
            }
        }
        current.header = current.bbox.top;
        current.footer = current.bbox.bottom;
        let slack = params.region_line_slack;
        current.lines.retain(|l| {
            l.top >= current.bbox.top - slack
                && l.bottom <= current.bbox.bottom + slack
                && l.x0 >= current.bbox.x0 - slack
                && l.x1 <= current.bbox.x1 + slack
        });
        current.lines.sort_by(|a, b| a.top.partial_cmp(&b.top).unwrap());
        merged.push(current);
    }

    merged.sort_by(|a, b| a.bbox.top.partial_cmp(&b.bbox.top).unwrap());
    merged
}
