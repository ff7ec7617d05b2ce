//! # hatchgen
//!
//! Hatch line generation for rectangular parts.
//!
//! Give it the corner points of an axis-aligned rectangle, an angle in
//! degrees (0 to 180) and a spacing step, and it returns the parallel
//! line segments that fill the rectangle, in sweep order.
//!
//! ```
//! use hatchgen::{generate_hatch, Point};
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let lines = generate_hatch(&square, 90.0, 1.0);
//! assert_eq!(lines.len(), 9);
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! `mod foo;` loads `foo.rs`, `pub mod` exports it, and `pub use`
//! re-exports the handful of names most callers need at the crate root.

pub mod angle;
pub mod geometry;
pub mod hatch;
pub mod request;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use angle::{HatchRegime, degrees_to_radians};
pub use geometry::{Bounds, Point, Segment, find_bottom_right, find_top_left};
pub use hatch::{
    falling_diagonal_lines, generate_hatch, generate_hatch_in, horizontal_lines,
    rising_diagonal_lines, vertical_lines,
};
pub use request::{HatchError, HatchRequest};
pub use svg::{SvgError, extract_contour_from_svg};
