//! Angle helpers: degree conversion and hatch regime classification.

use std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// The four families of hatch lines, one per angle range.
///
/// ## Rust Lesson #9: Enums as a Closed Set
///
/// In JS you'd branch on the angle with a chain of `if`s every time.
/// Here we classify once, then `match` on the variant. The compiler
/// refuses to build if a new variant is added but not handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HatchRegime {
    /// 0° (and 180°): lines of constant y.
    Horizontal,
    /// 90°: lines of constant x.
    Vertical,
    /// Between 0° and 90°: lines rising to the right.
    RisingDiagonal,
    /// Between 90° and 180°: lines falling to the right.
    FallingDiagonal,
}

impl HatchRegime {
    /// Pick the regime for an angle in degrees.
    ///
    /// 180° is the same line family as 0° and maps to `Horizontal`.
    /// Angles outside [0, 180] (or NaN) have no regime.
    pub fn classify(angle_degrees: f64) -> Option<Self> {
        if angle_degrees == 90.0 {
            Some(Self::Vertical)
        } else if angle_degrees == 0.0 || angle_degrees == 180.0 {
            Some(Self::Horizontal)
        } else if angle_degrees > 0.0 && angle_degrees < 90.0 {
            Some(Self::RisingDiagonal)
        } else if angle_degrees > 90.0 && angle_degrees < 180.0 {
            Some(Self::FallingDiagonal)
        } else {
            None
        }
    }

    /// Get the display name for this regime.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::RisingDiagonal => "rising-diagonal",
            Self::FallingDiagonal => "falling-diagonal",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
