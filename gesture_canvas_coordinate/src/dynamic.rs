// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Coordinate;

/// The coordinate pair tracked while zoom limiting can be in effect.
///
/// While a gesture is live past the elastic zoom boundary, the transform
/// actually shown on screen (the *limited* one) lags behind the authoritative
/// gesture-driven transform (the *unlimited* one). Only the unlimited value
/// is canonical state between gestures; the limited value exists purely for
/// display during the gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DynamicCoordinate {
    /// No limiting in effect; a single authoritative coordinate.
    Unlimited(Coordinate),
    /// A visually clamped coordinate shown during an in-progress gesture,
    /// paired with the authoritative unlimited one.
    Limited {
        /// The clamped coordinate to display.
        limited: Coordinate,
        /// The true, unbounded coordinate the gesture is producing.
        unlimited: Coordinate,
    },
}

impl DynamicCoordinate {
    /// The authoritative, unbounded coordinate.
    #[must_use]
    pub fn unlimited(&self) -> Coordinate {
        match *self {
            Self::Unlimited(unlimited) | Self::Limited { unlimited, .. } => unlimited,
        }
    }

    /// The coordinate to display: the clamped one while limiting is in
    /// effect, otherwise the unlimited one.
    #[must_use]
    pub fn limited(&self) -> Coordinate {
        match *self {
            Self::Unlimited(unlimited) => unlimited,
            Self::Limited { limited, .. } => limited,
        }
    }

    /// Returns `true` if a limited display coordinate is in effect.
    #[must_use]
    pub fn is_limited(&self) -> bool {
        matches!(self, Self::Limited { .. })
    }
}

impl Default for DynamicCoordinate {
    fn default() -> Self {
        Self::Unlimited(Coordinate::IDENTITY)
    }
}
