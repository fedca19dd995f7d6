// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::math;

/// Multiplier applied to scroll-wheel vertical deltas when a scroll burst is
/// zooming.
pub const SCROLL_ZOOM_MULTIPLIER: f64 = 0.0075;

/// Multiplier applied to double-tap-drag vertical translation.
pub const DRAG_ZOOM_MULTIPLIER: f64 = 0.005;

/// Per-source interpretation of raw zoom input.
///
/// Pinch, scroll-zoom, and double-tap-drag all funnel into one zoom handler;
/// the only thing that differs between them is how a raw delta maps to a
/// scale. Each variant carries the raw measurement and
/// [`unbounded_scale`](Self::unbounded_scale) turns it into a target scale,
/// before any bounds clamping or elastic limiting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomDelta {
    /// Cumulative pinch ratio since the gesture began. A value of `1.5`
    /// means "one and a half times the scale captured at begin".
    Magnification(f64),
    /// One scroll sample's vertical delta. Integrated multiplicatively:
    /// `scale *= 1 + dy * SCROLL_ZOOM_MULTIPLIER`.
    ScrollStep(f64),
    /// Total vertical translation since a double-tap-drag began. Dragging
    /// down (positive `dy`) zooms out: `scale = start * exp(-dy * k)`.
    DragTranslation(f64),
}

impl ZoomDelta {
    /// The raw measurement carried by this delta.
    #[must_use]
    pub fn raw(&self) -> f64 {
        match *self {
            Self::Magnification(value) | Self::ScrollStep(value) | Self::DragTranslation(value) => {
                value
            }
        }
    }

    /// Returns `true` if the raw measurement is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.raw().is_finite()
    }

    /// Derives the unbounded target scale for this delta.
    ///
    /// `anchor_scale` is the scale captured when the gesture began;
    /// `current_scale` is the live unlimited scale (only the integrated
    /// scroll variant is relative to it).
    #[must_use]
    pub fn unbounded_scale(&self, anchor_scale: f64, current_scale: f64) -> f64 {
        match *self {
            Self::Magnification(ratio) => anchor_scale * ratio,
            Self::ScrollStep(dy) => current_scale * (1.0 + dy * SCROLL_ZOOM_MULTIPLIER),
            Self::DragTranslation(dy) => anchor_scale * math::exp(-dy * DRAG_ZOOM_MULTIPLIER),
        }
    }
}
