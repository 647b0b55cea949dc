//! Multi-column layout detection using gap analysis.

use super::types::{BoundingBox, ColumnBoundary, ColumnSection, StructuredDataConfig};
use crate::text::extraction::TextFragment;

/// Detects multi-column layouts by identifying vertical gaps.
///
/// Algorithm:
/// 1. Analyze X positions to find significant vertical gaps
/// 2. Gaps wider than `min_column_gap` are considered column boundaries
/// 3. Assign text fragments to columns based on boundaries
/// 4. Return column sections in reading order
pub fn detect_column_layout(
    fragments: &[TextFragment],
    config: &StructuredDataConfig,
) -> Vec<ColumnSection> {
    if fragments.is_empty() {
        return vec![];
    }

    // Detect column boundaries
    let boundaries = detect_column_boundaries(fragments, config.min_column_gap);

    if boundaries.is_empty() {
        // Single column layout - return all text as one section
        return vec![create_single_column_section(fragments)];
    }

    // Assign fragments to columns
    assign_to_columns(fragments, &boundaries)
}

/// Detects vertical gaps that indicate column boundaries.
///
/// Algorithm:
/// 1. Sort all X positions
/// 2. Find gaps between consecutive positions
/// 3. Gaps wider than threshold are column boundaries
fn detect_column_boundaries(fragments: &[TextFragment], min_gap: f64) -> Vec<ColumnBoundary> {
    if fragments.is_empty() {
        return vec![];
    }

    // Collect all X ranges (start and end of each fragment)
    let mut x_ranges: Vec<(f64, f64)> = fragments.iter().map(|f| (f.x, f.x + f.width)).collect();

    x_ranges.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .expect("f64 coordinates extracted from PDF are never NaN")
    });

    let mut boundaries = Vec::new();

    // Find gaps between consecutive fragments
    for i in 0..x_ranges.len() - 1 {
        let current_end = x_ranges[i].1;
        let next_start = x_ranges[i + 1].0;
        let gap = next_start - current_end;

        if gap >= min_gap {
            // Found a column boundary
            let boundary_x = current_end + gap / 2.0; // Middle of the gap
            boundaries.push(ColumnBoundary::new(boundary_x, gap));
        }
    }

    boundaries
}

/// Assigns text fragments to columns based on boundaries.
fn assign_to_columns(
    fragments: &[TextFragment],
    boundaries: &[ColumnBoundary],
) -> Vec<ColumnSection> {
    // Number of columns = number of boundaries + 1
    let num_columns = boundaries.len() + 1;

    // Initialize column sections
    let mut columns: Vec<Vec<&TextFragment>> = vec![vec![]; num_columns];

    // Assign each fragment to a column
    for fragment in fragments {
        let column_idx = find_column_index(fragment.x, boundaries);
        columns[column_idx].push(fragment);
    }

    // Convert to ColumnSection structs
    columns
        .into_iter()
        .enumerate()
        .filter(|(_, frags)| !frags.is_empty())
        .map(|(idx, frags)| {
            // Sort fragments in reading order (top to bottom, left to right)
            let mut sorted = frags.clone();
            sorted.sort_by(|a, b| {
                b.y.partial_cmp(&a.y)
                    .expect("f64 coordinates extracted from PDF are never NaN")
                    .then_with(|| {
                        a.x.partial_cmp(&b.x)
                            .expect("f64 coordinates extracted from PDF are never NaN")
                    })
            });

            // Concatenate text
            let text = sorted
                .iter()
                .map(|f| f.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            // Calculate bounding box
            let bbox = calculate_column_bbox(&sorted);

            ColumnSection::new(idx, text, bbox)
        })
        .collect()
}

/// Finds the column index for a given X position.
fn find_column_index(x: f64, boundaries: &[ColumnBoundary]) -> usize {
    for (idx, boundary) in boundaries.iter().enumerate() {
        if x < boundary.x_position {
            return idx;
        }
    }
    boundaries.len() // Last column
}

/// Creates a single column section from all fragments.
fn create_single_column_section(fragments: &[TextFragment]) -> ColumnSection {
    let mut sorted = fragments.to_vec();
    sorted.sort_by(|a, b| {
        b.y.partial_cmp(&a.y)
            .expect("f64 coordinates extracted from PDF are never NaN")
            .then_with(|| {
                a.x.partial_cmp(&b.x)
                    .expect("f64 coordinates extracted from PDF are never NaN")
            })
    });

    let text = sorted
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let bbox = calculate_column_bbox(&sorted.iter().collect::<Vec<_>>());

    ColumnSection::new(0, text, bbox)
}

/// Calculates the bounding box for a set of fragments.
fn calculate_column_bbox(fragments: &[&TextFragment]) -> BoundingBox {
    if fragments.is_empty() {
        return BoundingBox::new(0.0, 0.0, 0.0, 0.0);
    }

    let min_x = fragments.iter().map(|f| f.x).fold(f64::INFINITY, f64::min);

    let max_x = fragments
        .iter()
        .map(|f| f.x + f.width)
        .fold(f64::NEG_INFINITY, f64::max);

    let min_y = fragments.iter().map(|f| f.y).fold(f64::INFINITY, f64::min);

    let max_y = fragments
        .iter()
        .map(|f| f.y + f.height)
        .fold(f64::NEG_INFINITY, f64::max);

    BoundingBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
}
