/// Normalized Y coordinate where the table region starts on a page.
///
/// Column boxes never cover the whole page height: headers, titles and
/// footers sit outside the band that actually contains tabular rows.
/// The default band was tuned on the sample document set and works for
/// most single-table pages.
pub const TABLE_Y_START: f64 = 0.18;

/// Normalized Y coordinate where the table region ends on a page.
///
/// Together with [`TABLE_Y_START`] this defines the vertical band shared
/// by every column box; only the horizontal extent varies per column.
pub const TABLE_Y_END: f64 = 0.95;

/// Factor applied to page image dimensions for on-screen display.
///
/// Page scans are typically rendered at 2x or higher DPI; showing them
/// at half size keeps the whole page visible while dragging boundaries.
/// All box coordinates handed to the widget are expressed in the scaled
/// display space, so the same factor must be used when converting back.
pub const DISPLAY_SCALE: f64 = 0.50;

/// Width factor for the inset display mode.
///
/// Boxes drawn at 53% of the true column width cover less of the page
/// text, which makes the underlying rows readable while the boundaries
/// are being adjusted. The logical column keeps its full extent.
pub const INSET_WIDTH_FACTOR: f64 = 0.53;

/// Horizontal bias for centering an inset box within its column.
///
/// With a width factor of 0.53 a bias of 0.235 places the narrowed box
/// in the middle of the column: 0.235 + 0.53 + 0.235 = 1.0.
pub const INSET_CENTER_BIAS: f64 = 0.235;

/// Multiplier implementing the 3-decimal rounding of normalized bounds.
///
/// Column boundaries are persisted with millimeter-ish precision; finer
/// digits are pixel noise from the inverse transform.
pub const BOUNDS_PRECISION: f64 = 1000.0;

/// Tolerance used when comparing normalized bounds for change detection.
///
/// Half of one rounding step: a boundary that moved by less than this
/// after round-tripping through pixel space is considered unchanged.
pub const BOUNDS_TOLERANCE: f64 = 0.0005;

/// Data type assigned to a column whose metadata cannot be recovered.
///
/// Used when an edited box carries a label that matches no known column
/// and positional lookup fails as well.
pub const DEFAULT_DATA_TYPE: &str = "text";

/// Fill colors for alternating columns in the static overlay.
///
/// Purple and blue, applied at [`COLUMN_FILL_ALPHA`] so the page text
/// stays legible underneath.
pub const COLUMN_FILL_COLORS: [[u8; 3]; 2] = [
    [168, 139, 250], // Purple
    [59, 130, 246],  // Blue
];

/// Opacity of the column fill rectangles, as a blend weight in [0,1].
pub const COLUMN_FILL_ALPHA: f32 = 40.0 / 255.0;

/// Color of the vertical boundary lines in the static overlay.
pub const BOUNDARY_LINE_COLOR: [u8; 3] = [168, 139, 250];

/// Opacity of the boundary lines; more opaque than the fills so the
/// exact boundary position reads clearly.
pub const BOUNDARY_LINE_ALPHA: f32 = 180.0 / 255.0;

/// Width of the vertical boundary lines in pixels.
pub const BOUNDARY_LINE_WIDTH: u32 = 2;

/// Palette slot assigned to each column, in column order.
///
/// The annotation widget colors boxes by label index into a small fixed
/// palette where adjacent slots look similar. Skipping slots keeps
/// neighboring columns visually distinct. Indexing wraps for templates
/// with more columns than slots.
pub const PALETTE_SLOTS: [usize; 9] = [0, 1, 3, 4, 6, 7, 9, 10, 12];

/// Prefix for the unused dummy labels appended to the label vocabulary.
///
/// The widget only exposes as many palette entries as it has labels, so
/// reaching the higher slots in [`PALETTE_SLOTS`] requires padding the
/// vocabulary. Dummy labels are never attached to a box.
pub const DUMMY_LABEL_PREFIX: &str = "_d";
