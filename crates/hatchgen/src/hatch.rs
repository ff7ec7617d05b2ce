//! Hatch line generation for rectangular footprints.
//!
//! Walks a family of parallel lines spaced `step` apart (measured
//! perpendicular to the lines) and clips every line to the rectangle.
//! The boundary edges themselves are never emitted.

use log::{debug, trace};

use crate::angle::{HatchRegime, degrees_to_radians};
use crate::geometry::{Bounds, Point, Segment};

/// Generate the hatch for a contour.
///
/// The corners are derived from `points` (order does not matter), then
/// the angle picks one of the four regimes. An empty contour or an angle
/// outside [0, 180] produces no lines.
///
/// ## Rust Lesson #17: Pure Functions
///
/// Every call builds and returns a fresh `Vec`. Nothing is remembered
/// between calls, so there is no state to reset.
pub fn generate_hatch(points: &[Point], angle_degrees: f64, step: f64) -> Vec<Segment> {
    let Some(bounds) = Bounds::from_points(points) else {
        debug!("empty contour, nothing to hatch");
        return Vec::new();
    };
    generate_hatch_in(&bounds, angle_degrees, step)
}

/// Generate the hatch for already-known rectangle corners.
pub fn generate_hatch_in(bounds: &Bounds, angle_degrees: f64, step: f64) -> Vec<Segment> {
    let Some(regime) = HatchRegime::classify(angle_degrees) else {
        debug!("angle {} has no hatch regime", angle_degrees);
        return Vec::new();
    };

    debug!(
        "hatching ({}, {})-({}, {}) at {}° step {} as {}",
        bounds.top_left.x,
        bounds.top_left.y,
        bounds.bottom_right.x,
        bounds.bottom_right.y,
        angle_degrees,
        step,
        regime.name()
    );

    let lines = match regime {
        HatchRegime::Vertical => vertical_lines(bounds, step),
        HatchRegime::Horizontal => horizontal_lines(bounds, step),
        HatchRegime::RisingDiagonal => rising_diagonal_lines(bounds, angle_degrees, step),
        HatchRegime::FallingDiagonal => falling_diagonal_lines(bounds, angle_degrees, step),
    };

    debug!("emitted {} lines", lines.len());
    lines
}

/// Lines of constant x, left to right, spanning the full height.
pub fn vertical_lines(bounds: &Bounds, step: f64) -> Vec<Segment> {
    let top = bounds.top_left.y;
    let bottom = bounds.bottom_right.y;

    // x = left + i·step, never a running sum
    let mut lines = Vec::new();
    let mut i = 1.0;
    let mut x = bounds.top_left.x + step;
    while x < bounds.bottom_right.x {
        lines.push(Segment::new(Point::new(x, top), Point::new(x, bottom)));

        i += 1.0;
        let next = bounds.top_left.x + i * step;
        if next <= x {
            trace!("step {} no longer advances x = {}", step, x);
            break;
        }
        x = next;
    }
    lines
}

/// Lines of constant y, bottom to top, spanning the full width.
pub fn horizontal_lines(bounds: &Bounds, step: f64) -> Vec<Segment> {
    let left = bounds.top_left.x;
    let right = bounds.bottom_right.x;

    let mut lines = Vec::new();
    let mut i = 1.0;
    let mut y = bounds.bottom_right.y + step;
    while y < bounds.top_left.y {
        lines.push(Segment::new(Point::new(left, y), Point::new(right, y)));

        i += 1.0;
        let next = bounds.bottom_right.y + i * step;
        if next <= y {
            trace!("step {} no longer advances y = {}", step, y);
            break;
        }
        y = next;
    }
    lines
}

/// Lines `y = k·x + b` with `0° < angle < 90°`.
///
/// The sweep starts at the line through the top-left corner and lowers
/// the intercept by `step / cos(angle)` until it passes the line through
/// the bottom-right corner. Each segment runs from the top (or right)
/// edge to the left (or bottom) edge.
pub fn rising_diagonal_lines(bounds: &Bounds, angle_degrees: f64, step: f64) -> Vec<Segment> {
    let tl = bounds.top_left;
    let br = bounds.bottom_right;

    let angle = degrees_to_radians(angle_degrees);
    let k = angle.tan();
    let step_y = step / angle.cos();

    let mut b = tl.y - k * tl.x;
    let min_b = br.y - k * br.x;

    let mut lines = Vec::new();
    while b > min_b {
        let next = b - step_y;
        if next >= b {
            trace!("intercept step {} no longer advances b = {}", step_y, b);
            break;
        }
        b = next;

        // Top edge, falling back to the right edge.
        let mut first = Point::new((tl.y - b) / k, tl.y);
        if first.x > br.x {
            first = Point::new(br.x, k * br.x + b);
            if first.y < br.y {
                trace!("b = {} misses the right edge, sweep done", b);
                break;
            }
        }

        // Left edge, falling back to the bottom edge.
        let mut second = Point::new(tl.x, k * tl.x + b);
        if second.y < br.y {
            second = Point::new((br.y - b) / k, br.y);
            if second.x > br.x {
                trace!("b = {} misses the bottom edge, sweep done", b);
                break;
            }
        }

        lines.push(Segment::new(first, second));
    }
    lines
}

/// Lines `y = k·x + b` with `90° < angle < 180°` (k is negative).
///
/// Mirror of [`rising_diagonal_lines`]: the sweep starts at the line
/// through the top-right corner and ends past the bottom-left corner.
/// Each segment runs from the top (or left) edge to the right (or bottom)
/// edge.
pub fn falling_diagonal_lines(bounds: &Bounds, angle_degrees: f64, step: f64) -> Vec<Segment> {
    let tl = bounds.top_left;
    let br = bounds.bottom_right;

    let angle = degrees_to_radians(angle_degrees);
    let k = angle.tan();
    let step_y = step / degrees_to_radians(180.0 - angle_degrees).cos();

    let top_right = bounds.top_right();
    let bottom_left = bounds.bottom_left();
    let mut b = top_right.y - k * top_right.x;
    let min_b = bottom_left.y - k * bottom_left.x;

    let mut lines = Vec::new();
    while b > min_b {
        let next = b - step_y;
        if next >= b {
            trace!("intercept step {} no longer advances b = {}", step_y, b);
            break;
        }
        b = next;

        // Top edge, falling back to the left edge.
        let mut first = Point::new((tl.y - b) / k, tl.y);
        if first.x < tl.x {
            first = Point::new(tl.x, k * tl.x + b);
            if first.y < br.y {
                trace!("b = {} misses the left edge, sweep done", b);
                break;
            }
        }

        // Right edge, falling back to the bottom edge.
        let mut second = Point::new(br.x, k * br.x + b);
        if second.y < br.y {
            second = Point::new((br.y - b) / k, br.y);
            if second.x < tl.x {
                trace!("b = {} misses the bottom edge, sweep done", b);
                break;
            }
        }

        lines.push(Segment::new(first, second));
    }
    lines
}

// ============================================================================
// TESTS
// ============================================================================
