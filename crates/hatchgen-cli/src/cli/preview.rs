//! PNG preview of a hatch, rendered through resvg.

use image::{DynamicImage, RgbaImage};
use resvg::usvg;
use tiny_skia::Pixmap;

use hatchgen::{Bounds, Segment};

use super::output::lines_to_svg;

/// Longest side of the preview image in pixels.
const PREVIEW_SIZE: u32 = 1200;

/// Render hatch lines and the rectangle outline to an image.
pub fn render_to_image(bounds: &Bounds, lines: &[Segment]) -> Result<DynamicImage, String> {
    let svg = lines_to_svg(bounds, lines);

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|e| format!("Failed to parse generated SVG: {}", e))?;

    let size = tree.size();
    let scale = PREVIEW_SIZE as f32 / size.width().max(size.height());
    let width = ((size.width() * scale).round() as u32).max(1);
    let height = ((size.height() * scale).round() as u32).max(1);

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| format!("Failed to create {}x{} pixmap", width, height))?;

    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let rgba = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| "Failed to create image".to_string())?;

    Ok(DynamicImage::ImageRgba8(rgba))
}

/// Render and save a PNG preview.
pub fn write_preview(path: &str, bounds: &Bounds, lines: &[Segment]) -> Result<(), String> {
    let image = render_to_image(bounds, lines)?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| format!("Failed to write {}: {}", path, e))
}
