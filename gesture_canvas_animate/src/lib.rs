// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture Canvas Animate: cancellable transform animation sessions.
//!
//! This crate interpolates between two
//! [`Coordinate`](gesture_canvas_coordinate::Coordinate) values over time
//! with a symmetric ease-in-out curve. It is host-agnostic: there is no clock
//! inside, the host drives an [`Animation`] by calling
//! [`Animation::advance`] with timestamps from its own frame source, and
//! tests can drive it with synthetic ticks.
//!
//! Cancellation is cooperative. [`Animation::cancel`] sets a flag that is
//! observed before the next sample is produced; a cancelled session stops
//! where it is and never forces the target value.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use gesture_canvas_coordinate::Coordinate;
//! use gesture_canvas_animate::{Animation, Sample};
//!
//! let start = Coordinate::IDENTITY;
//! let target = Coordinate::new(Vec2::new(100.0, 0.0), 2.0);
//! let mut animation = Animation::with_duration(start, target, 1.0);
//!
//! // The first tick stamps the session's start time.
//! assert_eq!(animation.advance(10.0), Sample::Active(start));
//!
//! // Halfway through, the sample is strictly between start and target.
//! let Sample::Active(mid) = animation.advance(10.5) else {
//!     panic!("expected an active sample");
//! };
//! assert!(mid.scale > 1.0 && mid.scale < 2.0);
//!
//! // At (or past) the duration, the sample is exactly the target.
//! assert_eq!(animation.advance(11.0), Sample::Finished(target));
//! ```
//!
//! Timestamps are `f64` seconds from an arbitrary origin; only differences
//! matter.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod easing;

pub use animation::{Animation, DEFAULT_DURATION, Sample};
pub use easing::ease_in_out;
