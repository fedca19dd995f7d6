// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::Modifiers;

/// Minimum per-sample delta magnitude before a scroll burst starts.
pub(crate) const SCROLL_START_THRESHOLD: f64 = 1.5;

/// Seconds of quiescence after which a scroll burst auto-ends.
pub(crate) const SCROLL_IDLE_TIMEOUT: f64 = 0.15;

/// Multiplier applied to coarse (non-precise) wheel deltas.
pub(crate) const COARSE_DELTA_MULTIPLIER: f64 = 10.0;

/// What a scroll burst is currently driving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScrollMethod {
    Pan,
    Zoom,
}

/// Classifies one scroll sample.
///
/// Zoom when the zoom modifier is held or when the deltas are coarse (a
/// mouse wheel rather than a trackpad); pan otherwise.
pub(crate) fn classify(modifiers: Modifiers, precise: bool) -> ScrollMethod {
    if modifiers.contains(Modifiers::COMMAND) || !precise {
        ScrollMethod::Zoom
    } else {
        ScrollMethod::Pan
    }
}

/// Live state of a scroll burst.
///
/// Deltas are accumulated into `translation` so the pan sub-gesture can be
/// driven against a fixed begin baseline, and each sample pushes the idle
/// `deadline` forward. `Canvas::tick` past the deadline synthesizes the
/// terminal end phase.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScrollState {
    pub(crate) method: ScrollMethod,
    pub(crate) deadline: f64,
    pub(crate) translation: Vec2,
    pub(crate) last_location: Point,
}
