//! Adapter from this workspace's PDF decoding collaborators
//! ([`crate::graphics::extraction`], [`crate::text::extraction`]) onto the
//! table pipeline's [`super::geometry::PageView`] contract.
//!
//! The core pipeline is deliberately decoupled from any particular decoder
//! (spec §4.4): this module is the one place that bridges the two. Two
//! simplifications fall out of the donor extractors' current granularity,
//! both worth calling out rather than hiding:
//!
//! - [`crate::text::extraction::TextFragment`] reports whole runs of text,
//!   not individual glyphs, and carries no font *name* (only a size). Each
//!   fragment becomes one [`Char`] here; fragments are not split further.
//!   Font-change header detection (spec §4.2.1) therefore only fires on a
//!   *size* change, encoded as a synthetic font name, until a richer
//!   extractor is wired in.
//! - [`crate::graphics::extraction::GraphicsExtractor`] already decomposes
//!   filled rectangles into four line segments, so the `rects`/`curves`
//!   collapse step (spec §4.1.1.1) has nothing left to do for this source;
//!   `rects`/`curves` are always empty on a bridged `PageView`.

use crate::graphics::extraction::{ExtractedGraphics, LineOrientation};
use crate::text::extraction::TextFragment;

use super::geometry::{BBox, Char, PageView, RuleLine};

/// Builds a [`PageView`] from already-extracted graphics and text.
///
/// `page_height` is the page's MediaBox height; PDF user space grows y
/// upward from the bottom-left, while every coordinate inside `tables::`
/// grows y downward from the top-left, so this is where that flip happens.
pub fn build_page_view(page_width: f64, page_height: f64, graphics: &ExtractedGraphics, fragments: &[TextFragment]) -> PageView {
    let bbox = BBox::new(0.0, 0.0, page_width, page_height);
    let flip = |y: f64| page_height - y;

    let chars: Vec<Char> = fragments
        .iter()
        .map(|f| {
            let top = flip(f.y + f.height);
            let bottom = flip(f.y);
            let fontname = format!("size-{:.1}", f.font_size);
            Char::new(BBox::new(f.x, top, f.x + f.width, bottom), f.text.clone(), fontname, f.font_size)
        })
        .collect();

    let lines: Vec<RuleLine> = graphics
        .lines
        .iter()
        .filter(|l| l.orientation == LineOrientation::Horizontal && l.is_stroked)
        .map(|l| {
            let y = flip(l.y1);
            RuleLine::new(l.x1.min(l.x2), l.x1.max(l.x2), y, y)
        })
        .collect();

    PageView::new(bbox).with_chars(chars).with_lines(lines)
}
