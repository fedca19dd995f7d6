// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// Mapping between screen space and content space: a translation offset plus
/// a uniform scale.
///
/// Screen-space points are called *locations*, content-space points are
/// called *positions*. The transform applies scale first, then offset:
/// `location = position * scale + offset`.
///
/// Invariant: `scale > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Translation applied after scaling, in screen units.
    pub offset: Vec2,
    /// Uniform zoom factor. Values above `1.0` magnify content.
    pub scale: f64,
}

impl Coordinate {
    /// The identity mapping: zero offset and a scale of `1.0`.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a coordinate from an offset and a uniform scale.
    #[inline]
    #[must_use]
    pub const fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Converts a screen-space location into a content-space position.
    #[must_use]
    pub fn position(&self, location: Point) -> Point {
        ((location.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Converts a content-space position into a screen-space location.
    #[must_use]
    pub fn location(&self, position: Point) -> Point {
        (position.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Converts a screen-space rectangle into a content-space rectangle.
    ///
    /// The origin maps by the point law; the size scales by `1 / scale`.
    #[must_use]
    pub fn position_rect(&self, location_rect: Rect) -> Rect {
        Rect::from_origin_size(
            self.position(location_rect.origin()),
            location_rect.size() / self.scale,
        )
    }

    /// Converts a content-space rectangle into a screen-space rectangle.
    ///
    /// The origin maps by the point law; the size scales by `scale`.
    #[must_use]
    pub fn location_rect(&self, position_rect: Rect) -> Rect {
        Rect::from_origin_size(
            self.location(position_rect.origin()),
            position_rect.size() * self.scale,
        )
    }

    /// Linearly interpolates offset and scale towards `other`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`. Used by the animation
    /// session to sample in-between transforms.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            offset: self.offset.lerp(other.offset, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }

    /// Returns `true` if offset and scale are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.offset.is_finite() && self.scale.is_finite()
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::IDENTITY
    }
}
