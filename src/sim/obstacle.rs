//! Obstacle generation
//!
//! The gap top is drawn uniformly between the top margin and the lowest
//! position that still leaves the bottom margin clear, then snapped to a
//! whole pixel so `gap_bottom - gap_top` is exactly the tier's gap.

use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Vertical limits a gap must respect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapBounds {
    /// Playfield height
    pub extent: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
}

impl GapBounds {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            extent: tuning.height,
            top_margin: tuning.gap_top_margin,
            bottom_margin: tuning.gap_bottom_margin,
        }
    }

    /// Inclusive range of valid gap tops. Returns `None` when the gap does
    /// not fit between the margins.
    pub fn gap_top_range(&self, gap: f32) -> Option<(f32, f32)> {
        let lo = self.top_margin;
        let hi = self.extent - gap - self.bottom_margin;
        (hi >= lo).then_some((lo, hi))
    }
}

/// Build one obstacle at `x` with a random gap of size `gap`.
///
/// A gap too large for the bounds collapses the range to zero width and
/// takes the midpoint between the two limits, rounded to a whole pixel.
pub fn generate<R: Rng>(x: f32, gap: f32, bounds: &GapBounds, rng: &mut R) -> Obstacle {
    let gap_top = match bounds.gap_top_range(gap) {
        Some((lo, hi)) if hi > lo => snap(rng.random_range(lo..=hi), lo, hi),
        Some((lo, _)) => lo,
        None => {
            let lo = bounds.top_margin;
            let hi = bounds.extent - gap - bounds.bottom_margin;
            ((lo + hi) / 2.0).round()
        }
    };

    Obstacle {
        x,
        gap_top,
        gap_bottom: gap_top + gap,
        scored: false,
    }
}

/// Round to a whole pixel without leaving `[lo, hi]`
fn snap(y: f32, lo: f32, hi: f32) -> f32 {
    y.round().clamp(lo, hi)
}
