use std::collections::HashMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{
    BOUNDS_PRECISION, BOUNDS_TOLERANCE, DEFAULT_DATA_TYPE, INSET_CENTER_BIAS, INSET_WIDTH_FACTOR,
    TABLE_Y_END, TABLE_Y_START,
};
use crate::geometry::Bbox;
use crate::template::{Column, Template};

pub mod palette;

/// Pixel dimensions of the canvas the widget lays boxes out on.
///
/// Usually the display size of the page image, not its full resolution;
/// both transforms must use the same canvas for a round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvas matching an image's pixel dimensions.
    pub fn of_image(image: &image::DynamicImage) -> Self {
        use image::GenericImageView;

        let (width, height) = image.dimensions();
        Self { width, height }
    }

    /// Canvas scaled by a display factor, dimensions floored to whole
    /// pixels.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            width: (self.width as f64 * factor).floor() as u32,
            height: (self.height as f64 * factor).floor() as u32,
        }
    }
}

/// Normalized vertical band containing the table region.
///
/// Every column box shares this band; only horizontal extents differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub y_start: f64,
    pub y_end: f64,
}

impl Default for Band {
    fn default() -> Self {
        Self {
            y_start: TABLE_Y_START,
            y_end: TABLE_Y_END,
        }
    }
}

/// How column boxes are sized for display.
///
/// `Inset` boxes are deliberately narrower than the true column so they
/// cover less page text. Inset is display-only: boxes fed to the widget
/// for editing always use `Exact`, which the inverse transform undoes
/// losslessly up to pixel quantization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DisplayMode {
    #[default]
    Exact,
    Inset { width_factor: f64, center_bias: f64 },
}

impl DisplayMode {
    /// Inset mode with the stock narrowing factors.
    pub fn inset() -> Self {
        Self::Inset {
            width_factor: INSET_WIDTH_FACTOR,
            center_bias: INSET_CENTER_BIAS,
        }
    }
}

/// A pixel-space rectangle on the canvas, labeled with a column name.
///
/// This is the shape exchanged with the annotation widget. Vertical
/// placement is derived from the band, never stored independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub label: String,
}

impl Annotation {
    /// The annotation's rectangle as a geometric box.
    pub fn bbox(&self) -> Bbox {
        Bbox::new_from_min_size(
            DVec2::new(self.left as f64, self.top as f64),
            DVec2::new(self.width as f64, self.height as f64),
        )
    }
}

/// Converts a template into widget annotations for the given canvas.
///
/// One box per column, column order preserved, every box spanning the
/// same vertical band. Bounds are not validated here; a degenerate
/// column produces a degenerate box.
pub fn annotations_from_template(
    template: &Template,
    canvas: Canvas,
    band: Band,
    mode: DisplayMode,
) -> Vec<Annotation> {
    let canvas_size = DVec2::new(canvas.width as f64, canvas.height as f64);

    template
        .columns
        .iter()
        .map(|column| {
            let region = Bbox::new(
                DVec2::new(column.x_start, band.y_start) * canvas_size,
                DVec2::new(column.x_end, band.y_end) * canvas_size,
            );
            let (_, top) = region.pixel_origin();
            let (_, height) = region.pixel_size();

            let (left, width) = match mode {
                DisplayMode::Exact => {
                    let (left, _) = region.pixel_origin();
                    let (width, _) = region.pixel_size();
                    (left, width)
                }
                DisplayMode::Inset {
                    width_factor,
                    center_bias,
                } => {
                    let full_width = region.width();
                    (
                        (region.min.x + full_width * center_bias).floor() as i32,
                        (full_width * width_factor).floor() as i32,
                    )
                }
            };

            Annotation {
                left,
                top,
                width,
                height,
                label: column.name.clone(),
            }
        })
        .collect()
}

/// Folds an edited box set back into a template.
///
/// Boundaries are renormalized against the canvas width and rounded to
/// 3 decimals. Column metadata is reconciled by label, falling back to
/// position, falling back to [`DEFAULT_DATA_TYPE`]; a box without a
/// label gets a synthesized `Column_{i}` name. The result is sorted by
/// `x_start`, the canonical order after every edit, and carries every
/// other template field over from `prior`.
///
/// `canvas_width` must be positive; zero is the caller's bug.
pub fn template_from_annotations(
    annotations: &[Annotation],
    canvas_width: u32,
    prior: &Template,
) -> Template {
    debug_assert!(canvas_width > 0, "canvas width must be positive");
    let width = canvas_width as f64;

    let by_name: HashMap<&str, &Column> = prior
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column))
        .collect();

    let mut columns: Vec<Column> = annotations
        .iter()
        .enumerate()
        .map(|(index, annotation)| {
            let x_start = round_bounds(annotation.left as f64 / width);
            let x_end = round_bounds((annotation.left + annotation.width) as f64 / width);

            let name = if annotation.label.is_empty() {
                format!("Column_{index}")
            } else {
                annotation.label.clone()
            };

            let original = by_name
                .get(annotation.label.as_str())
                .copied()
                .or_else(|| prior.columns.get(index));
            let data_type = original
                .map(|column| column.data_type.clone())
                .unwrap_or_else(|| DEFAULT_DATA_TYPE.to_string());

            Column {
                name,
                x_start,
                x_end,
                data_type,
            }
        })
        .collect();

    columns.sort_by(|a, b| {
        a.x_start
            .partial_cmp(&b.x_start)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Template {
        document_type: prior.document_type.clone(),
        columns,
    }
}

/// Whether any column boundary moved between two column sequences.
///
/// Only `(x_start, x_end)` pairs participate; names and data types do
/// not trigger a refresh. Differences within [`BOUNDS_TOLERANCE`] are
/// quantization noise from the pixel round trip, not edits.
pub fn boundaries_changed(previous: &[Column], current: &[Column]) -> bool {
    if previous.len() != current.len() {
        return true;
    }
    previous.iter().zip(current).any(|(a, b)| {
        (a.x_start - b.x_start).abs() > BOUNDS_TOLERANCE
            || (a.x_end - b.x_end).abs() > BOUNDS_TOLERANCE
    })
}

fn round_bounds(value: f64) -> f64 {
    (value * BOUNDS_PRECISION).round() / BOUNDS_PRECISION
}
