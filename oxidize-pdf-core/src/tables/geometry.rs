//! Geometry primitives shared by the table reconstruction pipeline.
//!
//! Every coordinate here is in PDF user-space points with the y-axis
//! normalised to increase downward (top of the page is `top == 0`). Callers
//! that bridge from a raw PDF content stream (which grows y upward) must
//! flip the axis before constructing a [`PageView`]; nothing under
//! `tables::` ever looks at the source coordinate sign.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, `x0 <= x1` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0: x0.min(x1),
            top: top.min(bottom),
            x1: x0.max(x1),
            bottom: top.max(bottom),
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Whether `self` fully contains `other` (inclusive).
    pub fn contains(&self, other: &BBox) -> bool {
        self.x0 <= other.x0 && other.x1 <= self.x1 && self.top <= other.top && other.bottom <= self.bottom
    }

    /// Whether the x-extents of the two boxes overlap at all.
    pub fn overlaps_x(&self, other: &BBox) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1
    }

    /// Whether the y-extents of the two boxes overlap at all.
    pub fn overlaps_y(&self, other: &BBox) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }

    pub fn overlaps(&self, other: &BBox) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Grows each side outward by `slack`.
    pub fn expand(&self, slack: f64) -> BBox {
        BBox::new(self.x0 - slack, self.top - slack, self.x1 + slack, self.bottom + slack)
    }
}

/// A single positioned glyph.
///
/// `text` holds one grapheme (usually one character, but kept as a `String`
/// so multi-byte UTF-8 graphemes survive intact). Characters whose PDF text
/// matrix rotates or shears the glyph are flagged `rotated` and are excluded
/// from every layout computation downstream (see spec Non-goals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Char {
    pub bbox: BBox,
    pub text: String,
    pub fontname: String,
    pub size: f64,
    pub rotated: bool,
}

impl Char {
    pub fn new(bbox: BBox, text: impl Into<String>, fontname: impl Into<String>, size: f64) -> Self {
        Self {
            bbox,
            text: text.into(),
            fontname: fontname.into(),
            size,
            rotated: false,
        }
    }

    pub fn rotated(mut self, rotated: bool) -> Self {
        self.rotated = rotated;
        self
    }

    /// True for whitespace, including the single-space glyph pdfminer-style
    /// extractors synthesise between words.
    pub fn is_space(&self) -> bool {
        self.text.chars().all(|c| c.is_whitespace()) || self.text.is_empty()
    }

    pub fn is_dot(&self) -> bool {
        self.text == "."
    }
}

/// A horizontal ruling line. Vertical rulings are out of scope: the pipeline
/// only ever reasons about horizontal evidence (see spec §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleLine {
    pub x0: f64,
    pub x1: f64,
    pub top: f64,
    pub bottom: f64,
    /// Endpoint-to-endpoint span; stored rather than recomputed because
    /// concatenation of collinear fragments can widen it past `x1 - x0` of
    /// any single contributing fragment.
    pub width: f64,
    /// Original fragment x-ranges that were concatenated into this line,
    /// used as a tiebreaker when several rulings are equally wide candidates
    /// for the header baseline.
    pub segments: Vec<(f64, f64)>,
    pub dot_line: bool,
}

impl RuleLine {
    pub fn new(x0: f64, x1: f64, top: f64, bottom: f64) -> Self {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        Self {
            x0,
            x1,
            top,
            bottom,
            width: x1 - x0,
            segments: vec![(x0, x1)],
            dot_line: false,
        }
    }

    pub fn dot_leader(x0: f64, x1: f64, top: f64, bottom: f64) -> Self {
        let mut line = Self::new(x0, x1, top, bottom);
        line.dot_line = true;
        line
    }

    pub fn as_bbox(&self) -> BBox {
        BBox::new(self.x0, self.top, self.x1, self.bottom)
    }
}

/// A filled rectangle or curve, as decoded from the content stream. Thin
/// filled rectangles (`height < 5`) are folded into ruling lines by
/// [`crate::tables::finder`]; everything else is kept around only so future
/// detectors can reason about non-ruling graphics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub bbox: BBox,
    pub filled: bool,
    pub stroked: bool,
}

/// A curved path segment (bezier), treated identically to [`Rect`] for the
/// purpose of ruling-line collapse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub bbox: BBox,
    pub filled: bool,
}

/// The result of cropping a [`PageView`] to a sub-region.
pub enum CropResult {
    Ok(PageView),
    /// The requested bbox contains no characters and no rulings.
    EmptyBand,
    /// The requested bbox does not intersect the page at all.
    OutOfBounds,
}

/// A read-only, croppable view over one page's decoded geometry.
///
/// This is the sole interface the core pipeline has onto PDF content; it is
/// the "PageView provider" external collaborator of spec §4.4. Construction
/// from an actual PDF is the caller's responsibility (see
/// `crate::tables::bridge` for the adapter used by this workspace's parser).
#[derive(Debug, Clone)]
pub struct PageView {
    pub bbox: BBox,
    pub chars: Vec<Char>,
    pub lines: Vec<RuleLine>,
    pub rects: Vec<Rect>,
    pub curves: Vec<Curve>,
}

impl PageView {
    pub fn new(bbox: BBox) -> Self {
        Self {
            bbox,
            chars: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            curves: Vec::new(),
        }
    }

    pub fn with_chars(mut self, chars: Vec<Char>) -> Self {
        self.chars = chars;
        self
    }

    pub fn with_lines(mut self, lines: Vec<RuleLine>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_rects(mut self, rects: Vec<Rect>) -> Self {
        self.rects = rects;
        self
    }

    pub fn with_curves(mut self, curves: Vec<Curve>) -> Self {
        self.curves = curves;
        self
    }

    /// Non-whitespace, non-rotated characters, the population every layout
    /// computation actually iterates over.
    pub fn layout_chars(&self) -> impl Iterator<Item = &Char> {
        self.chars.iter().filter(|c| !c.rotated)
    }

    /// Restricts the view to `bbox`, intersected with the page's own bbox.
    /// Stackable: cropping a crop further restricts it.
    pub fn crop(&self, bbox: BBox) -> CropResult {
        let clipped = BBox::new(
            bbox.x0.max(self.bbox.x0),
            bbox.top.max(self.bbox.top),
            bbox.x1.min(self.bbox.x1),
            bbox.bottom.min(self.bbox.bottom),
        );
        if clipped.is_empty() {
            return CropResult::OutOfBounds;
        }
        let chars: Vec<Char> = self
            .chars
            .iter()
            .filter(|c| clipped.overlaps(&c.bbox))
            .cloned()
            .collect();
        let lines: Vec<RuleLine> = self
            .lines
            .iter()
            .filter(|l| clipped.overlaps(&l.as_bbox()))
            .cloned()
            .collect();
        let rects: Vec<Rect> = self
            .rects
            .iter()
            .filter(|r| clipped.overlaps(&r.bbox))
            .cloned()
            .collect();
        let curves: Vec<Curve> = self
            .curves
            .iter()
            .filter(|c| clipped.overlaps(&c.bbox))
            .cloned()
            .collect();
        if chars.is_empty() && lines.is_empty() {
            return CropResult::EmptyBand;
        }
        CropResult::Ok(PageView {
            bbox: clipped,
            chars,
            lines,
            rects,
            curves,
        })
    }
}
