// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture Canvas Coordinate: pan/zoom transform primitives for infinite canvases.
//!
//! This crate provides the small, headless value types that describe how an
//! infinite 2D content plane maps onto a viewport. It focuses on:
//! - The [`Coordinate`] transform (translation offset plus a uniform scale).
//! - Conversion between screen space (*locations*) and content space
//!   (*positions*).
//! - Anchor-preserving zoom limiting with an elastic rubber-band feel
//!   ([`Coordinate::soft_limited`] / [`Coordinate::hard_limited`]).
//! - View fitting ([`Coordinate::fitting`]).
//!
//! It does **not** own any gesture handling or animation. Callers are
//! expected to:
//! - Drive these values from gesture input at a higher layer (for example,
//!   the `gesture_canvas` crate).
//! - Keep the [`DynamicCoordinate`] pair when a gesture is live, so that the
//!   authoritative (unlimited) transform and the visually clamped one can
//!   diverge during the gesture and converge when it ends.
//!
//! ## Conversion laws
//!
//! For a coordinate with offset `o` and scale `s`:
//!
//! ```text
//! position = (location - o) / s
//! location = position * s + o
//! ```
//!
//! Rectangles map their origin by the point law and their size by `1/s`
//! (respectively `s`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use gesture_canvas_coordinate::Coordinate;
//!
//! let coordinate = Coordinate::new(Vec2::new(100.0, 50.0), 2.0);
//!
//! // A screen location maps into content space and back.
//! let location = Point::new(300.0, 250.0);
//! let position = coordinate.position(location);
//! assert_eq!(position, Point::new(100.0, 100.0));
//! assert_eq!(coordinate.location(position), location);
//! ```
//!
//! ## Zoom limiting
//!
//! While a zoom gesture is live, scales past `1.0` can be rendered with
//! resistance instead of a hard stop:
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use gesture_canvas_coordinate::{Coordinate, ZoomBounds, DEFAULT_LIMIT_FACTOR};
//!
//! let unlimited = Coordinate::new(Vec2::ZERO, 3.0);
//! let anchor = Point::new(400.0, 300.0);
//!
//! // Elastic while the gesture is live...
//! let live = unlimited.soft_limited(anchor, DEFAULT_LIMIT_FACTOR, ZoomBounds::UNBOUNDED);
//! assert_eq!(live.scale, 1.5);
//!
//! // ...and fully clamped once it ends.
//! let settled = unlimited.hard_limited(anchor, ZoomBounds::UNBOUNDED);
//! assert_eq!(settled.scale, 1.0);
//!
//! // Either way, the anchor's screen location does not move.
//! assert_eq!(unlimited.position(anchor), live.position(anchor));
//! ```
//!
//! ## Design notes
//!
//! - Coordinates are plain `Copy` values; every update produces a new value
//!   rather than mutating in place.
//! - Scales are uniform. Rotation is intentionally left out.
//! - The scale invariant is `scale > 0`; the constructors do not enforce it,
//!   callers validating untrusted input should check [`Coordinate::is_finite`]
//!   and the sign themselves.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod coordinate;
mod dynamic;
mod fit;
mod limit;

pub use bounds::ZoomBounds;
pub use coordinate::Coordinate;
pub use dynamic::DynamicCoordinate;
pub use limit::DEFAULT_LIMIT_FACTOR;
