//! Watermark Module for PDF Modification
//!
//! This module provides functionality to add watermarks (text or image stamps)
//! to PDF pages. Watermarks can be placed in foreground or background layers
//! with configurable opacity, rotation, and positioning.
//!
//! # Example
//! ```ignore
//! use oxidize_pdf::operations::{PdfEditor, WatermarkSpec, WatermarkPosition, PageRange};
//!
//! let mut editor = PdfEditor::open("document.pdf")?;
//! let watermark = WatermarkSpec::text("CONFIDENTIAL")
//!     .with_opacity(0.3)
//!     .with_rotation(45.0)
//!     .with_position(WatermarkPosition::Center);
//! Watermarker::apply(&mut editor, watermark, PageRange::All)?;
//! editor.save("watermarked.pdf")?;
//! ```

use crate::graphics::Color;
use crate::text::Font;
use std::fmt;

/// Error type for watermark operations
#[derive(Debug, Clone)]
pub enum WatermarkError {
    /// Opacity value is out of valid range (0.0 to 1.0)
    InvalidOpacity(f32),
    /// Rotation angle is invalid
    InvalidRotation(f32),
    /// Text content is empty
    EmptyText,
    /// Page not found in document
    PageNotFound(usize),
    /// Page index out of bounds
    PageIndexOutOfBounds { index: usize, total: usize },
    /// Image format not supported
    UnsupportedImageFormat(String),
}

impl fmt::Display for WatermarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOpacity(value) => {
                write!(
                    f,
                    "invalid opacity value {}: must be between 0.0 and 1.0",
                    value
                )
            }
            Self::InvalidRotation(value) => {
                write!(f, "invalid rotation angle: {}", value)
            }
            Self::EmptyText => write!(f, "watermark text cannot be empty"),
            Self::PageNotFound(index) => write!(f, "page {} not found", index),
            Self::PageIndexOutOfBounds { index, total } => {
                write!(
                    f,
                    "page index {} is out of bounds (total pages: {})",
                    index, total
                )
            }
            Self::UnsupportedImageFormat(format) => {
                write!(f, "unsupported image format: {}", format)
            }
        }
    }
}

impl std::error::Error for WatermarkError {}

/// Result type for watermark operations
pub type WatermarkResult<T> = Result<T, WatermarkError>;

/// Content of a watermark - either text or image
#[derive(Debug, Clone)]
pub enum WatermarkContent {
    /// Text watermark with font and size
    Text {
        /// The text to display
        text: String,
        /// Font to use
        font: Font,
        /// Font size in points
        font_size: f32,
        /// Text color
        color: Color,
    },
    /// Image watermark with raw bytes
    Image {
        /// Image data (JPEG or PNG)
        data: Vec<u8>,
        /// Width of image on page
        width: f32,
        /// Height of image on page
        height: f32,
    },
}

/// Position of watermark on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WatermarkPosition {
    /// Center of the page
    Center,
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
    /// Custom position (x, y from bottom-left)
    Custom(f64, f64),
}

impl WatermarkPosition {
    /// Calculate actual coordinates given page dimensions
    ///
    /// # Arguments
    /// * `page_width` - Width of the page in points
    /// * `page_height` - Height of the page in points
    /// * `content_width` - Width of the watermark content
    /// * `content_height` - Height of the watermark content
    ///
    /// # Returns
    /// (x, y) coordinates for the watermark position
    pub fn calculate_coordinates(
        &self,
        page_width: f64,
        page_height: f64,
        content_width: f64,
        content_height: f64,
    ) -> (f64, f64) {
        const MARGIN: f64 = 50.0;

        match self {
            Self::Center => (
                (page_width - content_width) / 2.0,
                (page_height - content_height) / 2.0,
            ),
            Self::TopLeft => (MARGIN, page_height - content_height - MARGIN),
            Self::TopRight => (
                page_width - content_width - MARGIN,
                page_height - content_height - MARGIN,
            ),
            Self::BottomLeft => (MARGIN, MARGIN),
            Self::BottomRight => (page_width - content_width - MARGIN, MARGIN),
            Self::Custom(x, y) => (*x, *y),
        }
    }
}

/// Layer where watermark is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatermarkLayer {
    /// Render watermark above page content
    #[default]
    Foreground,
    /// Render watermark below page content
    Background,
}

/// Specification for a watermark
#[derive(Debug, Clone)]
pub struct WatermarkSpec {
    /// Content of the watermark (text or image)
    pub content: WatermarkContent,
    /// Position on the page
    pub position: WatermarkPosition,
    /// Opacity (0.0 = invisible, 1.0 = fully opaque)
    pub opacity: f32,
    /// Rotation angle in degrees
    pub rotation: f32,
    /// Layer (foreground or background)
    pub layer: WatermarkLayer,
}

impl WatermarkSpec {
    /// Default opacity for watermarks (30% visible)
    pub const DEFAULT_OPACITY: f32 = 0.3;

    /// Create a text watermark with default settings
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: WatermarkContent::Text {
                text: text.into(),
                font: Font::Helvetica,
                font_size: 72.0,
                color: Color::gray(0.5),
            },
            position: WatermarkPosition::Center,
            opacity: Self::DEFAULT_OPACITY,
            rotation: 0.0,
            layer: WatermarkLayer::Foreground,
        }
    }

    /// Create an image watermark
    pub fn image(data: Vec<u8>, width: f32, height: f32) -> Self {
        Self {
            content: WatermarkContent::Image {
                data,
                width,
                height,
            },
            position: WatermarkPosition::Center,
            opacity: Self::DEFAULT_OPACITY,
            rotation: 0.0,
            layer: WatermarkLayer::Foreground,
        }
    }

    /// Set the opacity (0.0 to 1.0)
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the rotation angle in degrees
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the position
    pub fn with_position(mut self, position: WatermarkPosition) -> Self {
        self.position = position;
        self
    }

    /// Set the layer (foreground or background)
    pub fn with_layer(mut self, layer: WatermarkLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Set the font for text watermarks
    pub fn with_font(mut self, font: Font, size: f32) -> Self {
        if let WatermarkContent::Text {
            font: ref mut f,
            font_size: ref mut s,
            ..
        } = self.content
        {
            *f = font;
            *s = size;
        }
        self
    }

    /// Set the color for text watermarks
    pub fn with_color(mut self, color: Color) -> Self {
        if let WatermarkContent::Text {
            color: ref mut c, ..
        } = self.content
        {
            *c = color;
        }
        self
    }

    /// Validate the watermark specification
    pub fn validate(&self) -> WatermarkResult<()> {
        // Validate opacity
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(WatermarkError::InvalidOpacity(self.opacity));
        }

        // Validate text is not empty
        if let WatermarkContent::Text { ref text, .. } = self.content {
            if text.is_empty() {
                return Err(WatermarkError::EmptyText);
            }
        }

        Ok(())
    }
}

/// Range of pages to apply watermark to
#[derive(Debug, Clone)]
pub enum PageRange {
    /// All pages in the document
    All,
    /// Range of pages (inclusive, 0-indexed)
    Range { start: usize, end: usize },
    /// Specific list of page indices (0-indexed)
    Pages(Vec<usize>),
    /// Single page (0-indexed)
    Single(usize),
}

impl PageRange {
    /// Get the list of page indices for a document with given page count
    pub fn to_indices(&self, total_pages: usize) -> Vec<usize> {
        match self {
            Self::All => (0..total_pages).collect(),
            Self::Range { start, end } => {
                let end = (*end).min(total_pages.saturating_sub(1));
                (*start..=end).collect()
            }
            Self::Pages(pages) => pages
                .iter()
                .filter(|&&p| p < total_pages)
                .copied()
                .collect(),
            Self::Single(page) => {
                if *page < total_pages {
                    vec![*page]
                } else {
                    vec![]
                }
            }
        }
    }
}

/// Watermarker for applying watermarks to PDF pages
pub struct Watermarker;

impl Watermarker {
    /// Apply a watermark to pages in a PDF
    ///
    /// # Arguments
    /// * `editor` - The PdfEditor instance
    /// * `spec` - Watermark specification
    /// * `page_range` - Which pages to apply the watermark to
    ///
    /// # Returns
    /// Ok(number of pages watermarked) on success, or WatermarkError on failure
    pub fn apply(
        editor: &mut super::PdfEditor,
        spec: WatermarkSpec,
        page_range: PageRange,
    ) -> WatermarkResult<usize> {
        // Validate the spec first
        spec.validate()?;

        let page_count = editor.page_count();
        let indices = page_range.to_indices(page_count);

        if indices.is_empty() {
            return Ok(0);
        }

        // Validate all page indices
        for &idx in &indices {
            if idx >= page_count {
                return Err(WatermarkError::PageIndexOutOfBounds {
                    index: idx,
                    total: page_count,
                });
            }
        }

        // Store the watermark for later application
        let count = indices.len();
        editor.pending_watermarks.push((indices, spec));

        Ok(count)
    }

    /// Apply a watermark to all pages in a PDF
    pub fn apply_to_all(
        editor: &mut super::PdfEditor,
        spec: WatermarkSpec,
    ) -> WatermarkResult<usize> {
        Self::apply(editor, spec, PageRange::All)
    }
}
