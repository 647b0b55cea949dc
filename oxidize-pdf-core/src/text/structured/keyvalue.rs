//! Key-value pair detection using pattern matching.

use super::types::{KeyValuePair, KeyValuePattern, StructuredDataConfig};
use crate::text::extraction::TextFragment;
use regex::Regex;

/// Detects key-value pairs in text fragments.
///
/// Uses three detection strategies:
/// 1. **Colon-separated**: "Label: Value" patterns
/// 2. **Spatial alignment**: "Label      Value" with significant horizontal gap
/// 3. **Tabular**: "Label\tValue" tab-separated patterns
pub fn detect_key_value_pairs(
    fragments: &[TextFragment],
    _config: &StructuredDataConfig,
) -> Vec<KeyValuePair> {
    let mut pairs = Vec::new();

    // Pattern 1: Colon-separated
    pairs.extend(detect_colon_pattern(fragments));

    // Pattern 2: Spatial alignment
    pairs.extend(detect_spatial_alignment(fragments));

    // Pattern 3: Tabular (tab-separated)
    pairs.extend(detect_tabular_pattern(fragments));

    pairs
}

/// Detects "Label: Value" patterns within single fragments.
fn detect_colon_pattern(fragments: &[TextFragment]) -> Vec<KeyValuePair> {
    let mut pairs = Vec::new();

    // Regex to match "Key: Value" pattern
    // Captures key before colon and value after colon
    let pattern = Regex::new(r"^([^:]+):\s*(.+)$").ok();

    if let Some(re) = pattern {
        for fragment in fragments {
            if let Some(captures) = re.captures(&fragment.text) {
                if captures.len() >= 3 {
                    let key = captures.get(1).map(|m| m.as_str().trim().to_string());
                    let value = captures.get(2).map(|m| m.as_str().trim().to_string());

                    if let (Some(k), Some(v)) = (key, value) {
                        if !k.is_empty() && !v.is_empty() {
                            pairs.push(KeyValuePair::new(
                                k,
                                v,
                                0.95, // High confidence for explicit colon pattern
                                KeyValuePattern::ColonSeparated,
                            ));
                        }
                    }
                }
            }
        }
    }

    pairs
}

/// Detects spatially aligned key-value pairs.
///
/// Algorithm:
/// 1. Group fragments by Y position (same line)
/// 2. For each line with 2 fragments, check if there's a significant horizontal gap
/// 3. If gap > threshold, treat as key-value pair
fn detect_spatial_alignment(fragments: &[TextFragment]) -> Vec<KeyValuePair> {
    let mut pairs = Vec::new();

    // Group fragments by Y position (tolerance of 3.0 units)
    let lines = group_by_y_position(fragments, 3.0);

    for line in lines {
        // Only consider lines with exactly 2 fragments for simple key-value
        if line.len() == 2 {
            let gap = line[1].x - (line[0].x + line[0].width);

            // Significant gap indicates separate columns
            if gap > 20.0 {
                pairs.push(KeyValuePair::new(
                    line[0].text.trim().to_string(),
                    line[1].text.trim().to_string(),
                    0.70, // Medium confidence for spatial pattern
                    KeyValuePattern::SpatialAlignment,
                ));
            }
        }
    }

    pairs
}

/// Detects tab-separated key-value pairs within fragments.
fn detect_tabular_pattern(fragments: &[TextFragment]) -> Vec<KeyValuePair> {
    let mut pairs = Vec::new();

    for fragment in fragments {
        // Check if text contains tab character
        if fragment.text.contains('\t') {
            let parts: Vec<&str> = fragment.text.split('\t').collect();

            // Simple key-value: exactly 2 parts
            if parts.len() == 2 {
                let key = parts[0].trim();
                let value = parts[1].trim();

                if !key.is_empty() && !value.is_empty() {
                    pairs.push(KeyValuePair::new(
                        key.to_string(),
                        value.to_string(),
                        0.85, // High confidence for explicit tab separation
                        KeyValuePattern::Tabular,
                    ));
                }
            }
        }
    }

    pairs
}

/// Groups text fragments by Y position.
///
/// Fragments with Y positions within `tolerance` are grouped together.
fn group_by_y_position(fragments: &[TextFragment], tolerance: f64) -> Vec<Vec<TextFragment>> {
    if fragments.is_empty() {
        return vec![];
    }

    let mut sorted = fragments.to_vec();
    sorted.sort_by(|a, b| {
        b.y.partial_cmp(&a.y)
            .unwrap()
            .then_with(|| a.x.partial_cmp(&b.x).unwrap())
    });

    let mut lines: Vec<Vec<TextFragment>> = vec![vec![sorted[0].clone()]];

    for fragment in &sorted[1..] {
        let last_line = lines.last_mut().unwrap();
        let last_y = last_line[0].y;

        if (fragment.y - last_y).abs() <= tolerance {
            last_line.push(fragment.clone());
        } else {
            lines.push(vec![fragment.clone()]);
        }
    }

    lines
}

/// Calculates confidence score for a key-value pair.
///
/// Based on pattern type and additional heuristics.
#[allow(dead_code)]
fn calculate_kv_confidence(pattern: KeyValuePattern, key: &str, value: &str) -> f64 {
    let base_confidence = match pattern {
        KeyValuePattern::ColonSeparated => 0.95,
        KeyValuePattern::SpatialAlignment => 0.70,
        KeyValuePattern::Tabular => 0.85,
    };

    // Reduce confidence if key or value is very short
    let length_penalty: f64 = if key.len() < 2 || value.len() < 2 {
        0.1
    } else {
        0.0
    };

    f64::max(base_confidence - length_penalty, 0.0)
}
