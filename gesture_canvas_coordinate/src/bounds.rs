// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Optional lower and upper bounds on the zoom scale.
///
/// Either side may be absent, in which case that direction is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomBounds {
    /// Smallest allowed scale (most zoomed out), if any.
    pub minimum: Option<f64>,
    /// Largest allowed scale (most zoomed in), if any.
    pub maximum: Option<f64>,
}

impl ZoomBounds {
    /// No bounds in either direction.
    pub const UNBOUNDED: Self = Self {
        minimum: None,
        maximum: None,
    };

    /// Creates bounds from optional minimum and maximum scales.
    ///
    /// When both sides are present the pair is normalized so that
    /// `minimum <= maximum`.
    #[must_use]
    pub fn new(minimum: Option<f64>, maximum: Option<f64>) -> Self {
        match (minimum, maximum) {
            (Some(lo), Some(hi)) if lo > hi => Self {
                minimum: Some(hi),
                maximum: Some(lo),
            },
            _ => Self { minimum, maximum },
        }
    }

    /// Clamps `scale` into these bounds.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        let scale = match self.minimum {
            Some(minimum) => scale.max(minimum),
            None => scale,
        };
        match self.maximum {
            Some(maximum) => scale.min(maximum),
            None => scale,
        }
    }

    /// Returns `true` if `scale` already satisfies both bounds.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        self.minimum.is_none_or(|minimum| scale >= minimum)
            && self.maximum.is_none_or(|maximum| scale <= maximum)
    }
}
