//! Core geometry types for hatchgen.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(Debug, Clone, Copy, PartialEq)]` gives us printing, copying
//! and `==` for free. Points and segments are tiny (two or four f64s) so
//! `Copy` is the natural choice: passing one around never moves ownership.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One hatch stroke, from `start` to `end`.
///
/// The direction is whatever the sweep produced; it is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Axis-aligned rectangle described by its top-left and bottom-right corners.
///
/// Y grows upward (CAD convention), so `top_left.y >= bottom_right.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top_left: Point,
    pub bottom_right: Point,
}

// ============================================================================
// IMPLEMENTATIONS (methods)
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl Bounds {
    /// Derive the rectangle corners from an unordered contour.
    ///
    /// ## Rust Lesson #6: Option<T>
    ///
    /// An empty contour has no corners, so we return `None` instead of
    /// inventing a rectangle. Callers use `let-else` to bail out early.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        Some(Self {
            top_left: find_top_left(points)?,
            bottom_right: find_bottom_right(points)?,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top_left.y - self.bottom_right.y
    }

    /// Top-right corner (max y, max x).
    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.bottom_right.x, self.top_left.y)
    }

    /// Bottom-left corner (min y, min x).
    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.top_left.x, self.bottom_right.y)
    }

    /// Closed-rectangle containment test, grown by `tolerance` on every side.
    #[inline]
    pub fn contains_within(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.top_left.x - tolerance
            && p.x <= self.bottom_right.x + tolerance
            && p.y >= self.bottom_right.y - tolerance
            && p.y <= self.top_left.y + tolerance
    }
}

/// Find the top-left corner of a contour.
///
/// Single pass: the highest point wins, ties on y go to the smaller x.
/// Returns `None` for an empty slice.
pub fn find_top_left(points: &[Point]) -> Option<Point> {
    let (first, rest) = points.split_first()?;
    let corner = rest.iter().fold(*first, |best, &p| {
        if p.y > best.y || (p.y == best.y && p.x < best.x) {
            p
        } else {
            best
        }
    });
    Some(corner)
}

/// Find the bottom-right corner of a contour.
///
/// Single pass: the lowest point wins, ties on y go to the larger x.
pub fn find_bottom_right(points: &[Point]) -> Option<Point> {
    let (first, rest) = points.split_first()?;
    let corner = rest.iter().fold(*first, |best, &p| {
        if p.y < best.y || (p.y == best.y && p.x > best.x) {
            p
        } else {
            best
        }
    });
    Some(corner)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    /// All orderings of a slice.
    fn permutations(items: &[Point]) -> Vec<Vec<Point>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn corners_of_demo_square() {
        let bounds = Bounds::from_points(&square()).unwrap();
        assert_eq!(bounds.top_left, Point::new(0.0, 10.0));
        assert_eq!(bounds.bottom_right, Point::new(10.0, 0.0));
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 10.0);
        assert_eq!(bounds.top_right(), Point::new(10.0, 10.0));
        assert_eq!(bounds.bottom_left(), Point::new(0.0, 0.0));
    }

    #[test]
    fn corners_ignore_input_order() {
        let rect = vec![
            Point::new(2.0, 3.0),
            Point::new(12.0, 3.0),
            Point::new(12.0, 8.0),
            Point::new(2.0, 8.0),
        ];
        let all = permutations(&rect);
        assert_eq!(all.len(), 24);

        for order in all {
            assert_eq!(find_top_left(&order), Some(Point::new(2.0, 8.0)), "order {:?}", order);
            assert_eq!(find_bottom_right(&order), Some(Point::new(12.0, 3.0)), "order {:?}", order);
        }
    }

    #[test]
    fn corners_of_random_rectangles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let x0: f64 = rng.random_range(-100.0..100.0);
            let y0: f64 = rng.random_range(-100.0..100.0);
            let x1 = x0 + rng.random_range(0.5..50.0_f64);
            let y1 = y0 + rng.random_range(0.5..50.0_f64);
            let mut pts = vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ];
            pts.rotate_left(rng.random_range(0..4));
            if rng.random_bool(0.5) {
                pts.reverse();
            }

            let bounds = Bounds::from_points(&pts).unwrap();
            assert_eq!(bounds.top_left, Point::new(x0, y1));
            assert_eq!(bounds.bottom_right, Point::new(x1, y0));
        }
    }

    #[test]
    fn single_point_is_both_corners() {
        let p = Point::new(4.0, -2.0);
        let bounds = Bounds::from_points(&[p]).unwrap();
        assert_eq!(bounds.top_left, p);
        assert_eq!(bounds.bottom_right, p);
    }

    #[test]
    fn empty_contour_has_no_bounds() {
        assert_eq!(Bounds::from_points(&[]), None);
        assert_eq!(find_top_left(&[]), None);
        assert_eq!(find_bottom_right(&[]), None);
    }

    #[test]
    fn containment_is_closed() {
        let bounds = Bounds::from_points(&square()).unwrap();
        assert!(bounds.contains_within(Point::new(0.0, 0.0), 0.0));
        assert!(bounds.contains_within(Point::new(10.0, 5.0), 0.0));
        assert!(bounds.contains_within(Point::new(5.0, 5.0), 0.0));
        assert!(!bounds.contains_within(Point::new(10.000001, 5.0), 0.0));
        assert!(!bounds.contains_within(Point::new(5.0, -0.1), 0.0));
    }

    #[test]
    fn containment_tolerance_grows_every_side() {
        let bounds = Bounds::from_points(&square()).unwrap();
        assert!(bounds.contains_within(Point::new(10.000001, 5.0), 1e-3));
        assert!(bounds.contains_within(Point::new(-0.0005, 10.0005), 1e-3));
        assert!(!bounds.contains_within(Point::new(5.0, -0.1), 1e-3));
    }
}
