// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Symmetric ease-in-out curve on the unit interval.
///
/// Smoothstep composed with itself: monotonic, `0` at `p = 0`, `1` at
/// `p = 1`, symmetric about `p = 0.5`, with zero slope at both ends. Inputs
/// outside `[0, 1]` are clamped.
#[must_use]
pub fn ease_in_out(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    smoothstep(smoothstep(p))
}

fn smoothstep(p: f64) -> f64 {
    p * p * (3.0 - 2.0 * p)
}
