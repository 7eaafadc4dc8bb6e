use std::path::Path;

use glam::DVec2;
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::pixelops::interpolate;
use imageproc::rect::Rect;
use snafu::ResultExt;
use tracing::info;

use crate::annotation::palette::LabelVocabulary;
use crate::annotation::{Annotation, Band};
use crate::consts::{
    BOUNDARY_LINE_ALPHA, BOUNDARY_LINE_COLOR, BOUNDARY_LINE_WIDTH, COLUMN_FILL_ALPHA,
    COLUMN_FILL_COLORS,
};
use crate::error::*;
use crate::geometry::Bbox;
use crate::template::Template;

/// Opens the page image whose dimensions drive the transforms.
pub fn open_page_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, GlassError> {
    let path = path.as_ref();
    let image = image::open(path).context(ImageOpenSnafu {
        path: path.to_string_lossy(),
    })?;
    Ok(image)
}

/// Renders the column overlay onto a copy of the page image.
///
/// Each column gets a translucent fill, alternating between two colors,
/// plus a pair of more opaque boundary lines at its edges. Columns
/// reaching past the image are clamped, not rejected.
pub fn draw_column_overlay(image: &DynamicImage, template: &Template, band: Band) -> RgbImage {
    let mut canvas = image.to_rgb8();
    let (width, height) = canvas.dimensions();
    let bounds = DVec2::new(width as f64, height as f64);

    for (index, column) in template.columns.iter().enumerate() {
        let region = Bbox::new(
            DVec2::new(column.x_start * bounds.x, band.y_start * bounds.y),
            DVec2::new(column.x_end * bounds.x, band.y_end * bounds.y),
        )
        .clamp(DVec2::ZERO, bounds);

        let fill = COLUMN_FILL_COLORS[index % COLUMN_FILL_COLORS.len()];
        blend_region(&mut canvas, region, Rgb(fill), COLUMN_FILL_ALPHA);

        // Boundary lines at both edges of the column
        for edge in [region.min.x, region.max.x] {
            let line = Bbox::new(
                DVec2::new(edge, region.min.y),
                DVec2::new(edge + BOUNDARY_LINE_WIDTH as f64, region.max.y),
            )
            .clamp(DVec2::ZERO, bounds);
            blend_region(&mut canvas, line, Rgb(BOUNDARY_LINE_COLOR), BOUNDARY_LINE_ALPHA);
        }
    }

    canvas
}

/// Draws widget-style box outlines over the canvas, colored per column.
///
/// Preview of what the annotation widget will show, including inset
/// boxes; outlines are opaque and thickened outward the way the widget
/// draws them.
pub fn draw_annotation_boxes(
    canvas: &mut RgbImage,
    annotations: &[Annotation],
    vocabulary: &LabelVocabulary,
) {
    for (index, annotation) in annotations.iter().enumerate() {
        let bbox = annotation.bbox();
        let (x, y) = bbox.pixel_origin();
        let (box_width, box_height) = bbox.pixel_size();
        if box_width <= 0 || box_height <= 0 {
            continue;
        }

        let color = Rgb(vocabulary.column_color(index));
        for offset in 0..BOUNDARY_LINE_WIDTH as i32 {
            let rect = Rect::at(x - offset, y - offset).of_size(
                (box_width + offset * 2) as u32,
                (box_height + offset * 2) as u32,
            );
            draw_hollow_rect_mut(canvas, rect, color);
        }
    }
}

/// Writes a rendered overlay to disk.
pub fn save_overlay<P: AsRef<Path>>(canvas: &RgbImage, path: P) -> Result<(), GlassError> {
    let path = path.as_ref();
    canvas.save(path).context(ImageWriteSnafu {
        path: path.to_string_lossy(),
    })?;

    info!("saved overlay to {}", path.display());
    Ok(())
}

/// Alpha-blends a solid color over a rectangular region.
fn blend_region(canvas: &mut RgbImage, region: Bbox, color: Rgb<u8>, alpha: f32) {
    let (x0, y0) = region.pixel_origin();
    let (region_width, region_height) = region.pixel_size();
    if region_width <= 0 || region_height <= 0 {
        return;
    }

    for y in y0..y0 + region_height {
        for x in x0..x0 + region_width {
            if x < 0 || y < 0 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            if x >= canvas.width() || y >= canvas.height() {
                continue;
            }
            let pixel = canvas.get_pixel_mut(x, y);
            *pixel = interpolate(color, *pixel, alpha);
        }
    }
}
