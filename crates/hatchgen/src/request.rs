//! Validated hatch requests.
//!
//! The engine in [`crate::hatch`] trusts its inputs. Callers that take
//! values from users (the CLI, job files) go through [`HatchRequest`]
//! first so bad angles and steps are reported instead of silently
//! producing nothing.

use crate::geometry::{Bounds, Point, Segment};
use crate::hatch::generate_hatch_in;

/// Error type for rejected hatch inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum HatchError {
    TooFewPoints { count: usize },
    AngleOutOfRange(f64),
    InvalidStep(f64),
}

impl std::fmt::Display for HatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HatchError::TooFewPoints { count } => {
                write!(f, "contour needs at least one point, got {}", count)
            }
            HatchError::AngleOutOfRange(angle) => {
                write!(f, "angle must be between 0 and 180 degrees, got {}", angle)
            }
            HatchError::InvalidStep(step) => {
                write!(f, "step must be a positive number, got {}", step)
            }
        }
    }
}

impl std::error::Error for HatchError {}

/// A contour, angle and step that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct HatchRequest {
    points: Vec<Point>,
    bounds: Bounds,
    angle: f64,
    step: f64,
}

impl HatchRequest {
    /// Check the inputs and derive the rectangle corners.
    ///
    /// ## Rust Lesson #20: Error Handling
    ///
    /// Returning `Result` forces the caller to decide what a bad angle
    /// means for them; the `?` operator bubbles it up in one character.
    pub fn new(points: Vec<Point>, angle: f64, step: f64) -> Result<Self, HatchError> {
        if !(0.0..=180.0).contains(&angle) {
            return Err(HatchError::AngleOutOfRange(angle));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(HatchError::InvalidStep(step));
        }
        let bounds = Bounds::from_points(&points)
            .ok_or(HatchError::TooFewPoints { count: points.len() })?;

        Ok(Self { points, bounds, angle, step })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Run the hatch engine on this request.
    pub fn generate(&self) -> Vec<Segment> {
        generate_hatch_in(&self.bounds, self.angle, self.step)
    }
}

// ============================================================================
// TESTS
// ============================================================================
