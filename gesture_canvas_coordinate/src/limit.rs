// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::{Coordinate, ZoomBounds};

/// The default elasticity while a gesture is live.
///
/// A factor near `0` behaves like a hard stop, a factor near `1` gives no
/// resistance. `0.25` produces the usual rubber-band feel; `0.0` is used once
/// the gesture ends so the snap-back animation settles exactly on the bound.
pub const DEFAULT_LIMIT_FACTOR: f64 = 0.25;

impl Coordinate {
    /// Applies elastic zoom limiting, anchored at `anchor`.
    ///
    /// Limiting only applies to zoom-in past `1.0`: coordinates with
    /// `scale <= 1.0` are returned unchanged. Otherwise the excess over `1.0`
    /// is compressed by `limit_factor`, the result is clamped into `bounds`,
    /// and the offset is recomputed so that `anchor` maps to the same screen
    /// location before and after.
    #[must_use]
    pub fn soft_limited(self, anchor: Point, limit_factor: f64, bounds: ZoomBounds) -> Self {
        if self.scale <= 1.0 {
            return self;
        }
        let limited_scale = bounds.clamp(1.0 + (self.scale - 1.0) * limit_factor);
        let magnification = limited_scale / self.scale;
        let anchor = anchor.to_vec2();
        Self {
            offset: anchor + (self.offset - anchor) * magnification,
            scale: limited_scale,
        }
    }

    /// Applies zoom limiting with zero elasticity.
    ///
    /// Equivalent to [`soft_limited`](Self::soft_limited) with a limit factor
    /// of `0.0`: any zoom-in past `1.0` is removed entirely. Used once a
    /// gesture ends to forbid residual zoom-in.
    #[must_use]
    pub fn hard_limited(self, anchor: Point, bounds: ZoomBounds) -> Self {
        self.soft_limited(anchor, 0.0, bounds)
    }
}
