// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that need `std` or `libm`.

#[cfg(feature = "std")]
pub(crate) fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn exp(x: f64) -> f64 {
    libm::exp(x)
}
