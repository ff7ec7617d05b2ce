//! SVG import - read a hatch contour from an SVG file.
//!
//! Uses usvg for complete SVG resolution (CSS, transforms, etc.)
//! then walks the tree looking for the first closed shape made only of
//! straight edges. `<rect>`, `<polygon>` and plain `M/L/Z` paths qualify;
//! curved outlines are skipped because hatch footprints are rectangles.
//!
//! SVG's y axis points down while hatch contours use y-up, so every point
//! is mirrored to `document_height - y`. A contour drawn at the top of the
//! document ends up at the top of the hatch plane.

use log::debug;

use crate::geometry::Point;

/// Error type for SVG import.
#[derive(Debug)]
pub enum SvgError {
    ParseError(String),
    NoContour,
}

impl std::fmt::Display for SvgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvgError::ParseError(msg) => write!(f, "SVG parse error: {}", msg),
            SvgError::NoContour => write!(f, "No straight-edged contour found in SVG"),
        }
    }
}

// Makes our error type work with the standard error trait
impl std::error::Error for SvgError {}

/// Extract the contour points of the first straight-edged shape.
pub fn extract_contour_from_svg(svg_content: &str) -> Result<Vec<Point>, SvgError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| SvgError::ParseError(e.to_string()))?;

    let height = tree.size().height() as f64;
    find_in_group(tree.root(), height).ok_or(SvgError::NoContour)
}

/// Depth-first search for the first usable path, in document order.
fn find_in_group(group: &usvg::Group, height: f64) -> Option<Vec<Point>> {
    group.children().iter().find_map(|node| match node {
        usvg::Node::Group(group) => find_in_group(group, height),
        usvg::Node::Path(path) => path_to_contour(path, height),
        _ => None,
    })
}

/// Convert a usvg path to contour points.
///
/// Only the first subpath is read. Returns `None` for curves or for
/// fewer than 3 distinct vertices.
fn path_to_contour(path: &usvg::Path, height: f64) -> Option<Vec<Point>> {
    use usvg::tiny_skia_path::PathSegment;

    let transform = path.abs_transform();
    let mut points: Vec<Point> = Vec::new();

    for segment in path.data().segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                if !points.is_empty() {
                    break;
                }
                points.push(map_point(transform, p, height));
            }
            PathSegment::LineTo(p) => points.push(map_point(transform, p, height)),
            PathSegment::QuadTo(..) | PathSegment::CubicTo(..) => {
                debug!("skipping curved path '{}'", path.id());
                return None;
            }
            PathSegment::Close => break,
        }
    }

    points.dedup_by(|a, b| (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
    // A closing LineTo back to the start duplicates the first vertex.
    if points.len() >= 2 && points.first() == points.last() {
        points.pop();
    }

    if points.len() >= 3 {
        debug!("contour '{}' with {} points", path.id(), points.len());
        Some(points)
    } else {
        None
    }
}

/// Apply the path transform, then flip into y-up coordinates.
fn map_point(
    transform: usvg::tiny_skia_path::Transform,
    p: usvg::tiny_skia_path::Point,
    height: f64,
) -> Point {
    let mut mapped = p;
    transform.map_points(std::slice::from_mut(&mut mapped));
    Point::new(mapped.x as f64, height - mapped.y as f64)
}

// ============================================================================
// TESTS
// ============================================================================
