//! Tunable thresholds for the table reconstruction pipeline.
//!
//! Per the design notes in spec §9, every numeric threshold the original
//! implementation scattered as module-level constants is collected here and
//! injected into each stage explicitly. Defaults match the documented
//! values; nothing downstream reads a bare literal for a geometric
//! tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Column-gap threshold: a horizontal gap between two characters wider
    /// than this starts a new column. Default 5.
    pub max_charspace: f64,
    /// Secondary, narrower column-gap threshold that only applies across a
    /// font-name change (e.g. a label in a bold header font butting up
    /// against a value in a body font). A gap wider than this *and* a
    /// font-name change starts a new column even when `max_charspace` alone
    /// would not. Default 3.
    pub font_change_gap_threshold: f64,
    /// Row-gap threshold: a vertical gap between two characters' lines
    /// *greater than* this starts a new row. May be negative (fine print can
    /// have slightly overlapping glyph boxes). Default -0.3.
    pub max_linespace: f64,
    /// Outward extension limit, in points, when growing a table region to
    /// the left of its seed ruling. Default 15.
    pub left_threshold: f64,
    /// As `left_threshold`, to the right. Default 15.
    pub right_threshold: f64,
    /// As `left_threshold`, upward. Default 15.
    pub top_threshold: f64,
    /// As `left_threshold`, downward. Uses the adaptive `line_threshold`
    /// (mode of character gaps) when `None`.
    pub bottom_threshold: Option<f64>,
    /// Width of the probe strip used for the two-column page test, and for
    /// re-checking single-column-ness during region growth. Default 3.
    pub mid_strip_width: f64,
    /// Minimum fraction of page height a midline strip must be populated by
    /// for the page to be treated as two-column. Default 0.05.
    pub two_column_height_fraction: f64,
    /// Minimum fraction of page height a midline strip must be populated by,
    /// within a candidate region's vertical range, to treat that region as
    /// full width rather than confined to one column. Default 0.30.
    pub one_column_height_fraction: f64,
    /// Minimum width, as a fraction of region width, for a ruling to be a
    /// header-fallback candidate. Default 0.30.
    pub header_fallback_min_width_fraction: f64,
    /// Minimum fraction of region height a header-fallback ruling must sit
    /// below the region top. Default 0.01.
    pub header_fallback_min_top_fraction: f64,
    /// Tolerance, as a fraction of cell width, for "leading approximately
    /// equals trailing" centring tests (captions, centred sub-titles).
    /// Default 0.20 for captions, 0.30 for continuation-row centring; both
    /// are exposed so callers can tune independently.
    pub caption_center_tolerance: f64,
    pub continuation_center_tolerance: f64,
    /// Leading-whitespace fraction of region width below which a top/bottom
    /// band is considered left-aligned (candidate decorative caption or
    /// footnote). Default 0.08 (the spec's "5%-10%" band, centred).
    pub caption_leading_fraction: f64,
    /// Multiplier applied to `max_charspace` for the vertical-gap guard in
    /// continuation-row merging. Default 1.5.
    pub continuation_gap_multiplier: f64,
    /// Dot-leader run length, in points, within which successive dot glyphs
    /// are coalesced into one run. Default 7.
    pub dot_leader_gap: f64,
    /// Minimum number of dots in a run for it to become a synthetic ruling.
    /// Default 3 (runs of *more than* 3 dots qualify).
    pub dot_leader_min_dots: usize,
    /// Maximum height for a filled rect/curve to collapse into a ruling
    /// line. Default 5.
    pub rect_collapse_max_height: f64,
    /// Slack, in points, used when re-filtering a merged region's rulings
    /// against its final bbox. Default 5.
    pub region_line_slack: f64,
    /// Inner padding applied when shrinking a cell bbox to its text, in the
    /// horizontal and vertical axes respectively. Defaults 0.5 / 0.2.
    pub shrink_padding_x: f64,
    pub shrink_padding_y: f64,
    /// Horizontal gap, in points, between two consecutive characters inside
    /// the same cell above which a space is synthesized in the extracted
    /// text (e.g. a currency symbol separated from its amount). Mirrors the
    /// donor text extractor's `space_threshold` word-joining tolerance,
    /// applied here at cell-assembly time rather than stream-extraction
    /// time. Default 1.0.
    pub word_space_gap: f64,
    /// Whether to treat `$`/`%`/other unit symbols as their own columns via
    /// rectangle-driven row splitting. Disabled by default: the spec
    /// documents this legacy mode as under-specified (§9 open questions).
    pub separate_units: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            max_charspace: 5.0,
            font_change_gap_threshold: 3.0,
            max_linespace: -0.3,
            left_threshold: 15.0,
            right_threshold: 15.0,
            top_threshold: 15.0,
            bottom_threshold: None,
            mid_strip_width: 3.0,
            two_column_height_fraction: 0.05,
            one_column_height_fraction: 0.30,
            header_fallback_min_width_fraction: 0.30,
            header_fallback_min_top_fraction: 0.01,
            caption_center_tolerance: 0.20,
            continuation_center_tolerance: 0.30,
            caption_leading_fraction: 0.08,
            continuation_gap_multiplier: 1.5,
            dot_leader_gap: 7.0,
            dot_leader_min_dots: 3,
            rect_collapse_max_height: 5.0,
            region_line_slack: 5.0,
            shrink_padding_x: 0.5,
            shrink_padding_y: 0.2,
            word_space_gap: 1.0,
            separate_units: false,
        }
    }
}
