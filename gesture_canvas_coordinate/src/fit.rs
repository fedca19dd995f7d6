// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::Coordinate;

impl Coordinate {
    /// Computes the coordinate that fits `frame` into a viewport of
    /// `viewport_size`, preserving aspect ratio.
    ///
    /// `frame` is a content-space rectangle; it is expanded by `padding` on
    /// all sides before fitting. The resulting scale is the largest uniform
    /// scale at which the expanded frame does not overflow the viewport, and
    /// the offset centers it.
    ///
    /// Callers must ensure the expanded frame has non-zero dimensions.
    #[must_use]
    pub fn fitting(frame: Rect, padding: f64, viewport_size: Size) -> Self {
        let frame = frame.inflate(padding, padding);
        let scale = (viewport_size.width / frame.width()).min(viewport_size.height / frame.height());
        let viewport_center = Vec2::new(viewport_size.width, viewport_size.height) / 2.0;
        Self {
            offset: viewport_center - frame.center().to_vec2() * scale,
            scale,
        }
    }
}
