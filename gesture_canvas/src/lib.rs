// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture Canvas: gesture arbitration for infinite pan/zoom canvases.
//!
//! This crate decides which single interaction — pan, zoom, rectangular
//! selection, or secondary-button drag — may drive the canvas transform at
//! any instant, and how gestures cancel one another when they compete for
//! the same input stream. It is headless: the host translates raw platform
//! input into phase calls on [`Canvas`] and renders from the events it
//! drains back out.
//!
//! ## Model
//!
//! - The transform is a
//!   [`Coordinate`](gesture_canvas_coordinate::Coordinate) (offset plus
//!   uniform scale) from `gesture_canvas_coordinate`, kept as a
//!   limited/unlimited
//!   [`DynamicCoordinate`](gesture_canvas_coordinate::DynamicCoordinate)
//!   pair so elastic zoom limiting can show resistance during a gesture.
//! - Pinch, scroll-zoom, and double-tap-drag share one zoom state machine;
//!   they differ only in the [`ZoomDelta`] interpretation of their raw
//!   input.
//! - Transitions between transforms animate through
//!   `gesture_canvas_animate` sessions, driven by [`Canvas::tick`].
//!
//! ## Arbitration rules
//!
//! - Pan begins are rejected while a zoom or selection is active.
//! - Zoom force-cancels an active pan (zoom always wins) and may be vetoed
//!   by a host policy registered with [`Canvas::set_zoom_policy`].
//! - Selection only begins while neither pan nor zoom is active, and blocks
//!   both until it ends.
//! - Any gesture begin cancels a running animation; gesture input always
//!   has priority.
//! - Non-finite input is dropped silently. Nothing in this crate is fatal:
//!   every anomaly degrades to "the gesture did not happen".
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use gesture_canvas::{Canvas, CanvasEvent};
//!
//! let mut canvas = Canvas::new();
//! canvas.set_size(Size::new(800.0, 600.0));
//!
//! canvas.pan_began(Point::new(100.0, 100.0));
//! canvas.pan_changed(Point::new(150.0, 130.0));
//! assert_eq!(canvas.coordinate().offset, Vec2::new(50.0, 30.0));
//! canvas.pan_ended(Point::new(150.0, 130.0));
//!
//! // Render from the drained events.
//! for event in canvas.drain_events() {
//!     if let CanvasEvent::CoordinateChanged(coordinate) = event {
//!         let _ = coordinate;
//!     }
//! }
//! ```
//!
//! ## Time
//!
//! Timestamps are `f64` seconds from an arbitrary monotonic origin supplied
//! by the host. [`Canvas::tick`] drives the scroll idle timeout and
//! animation sampling, so tests can run on synthetic clocks.
//!
//! This crate is `no_std` with `alloc`, and requires either the `std` or the
//! `libm` feature.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("gesture_canvas requires either the `std` or `libm` feature");

mod canvas;
mod event;
mod math;
mod modifiers;
mod scroll;
mod zoom;

pub use canvas::{
    CONTEXT_MENU_DISPLACEMENT, Canvas, DEFAULT_MAXIMUM_SCALE, DEFAULT_MINIMUM_SCALE,
};
pub use event::CanvasEvent;
pub use modifiers::Modifiers;
pub use zoom::{DRAG_ZOOM_MULTIPLIER, SCROLL_ZOOM_MULTIPLIER, ZoomDelta};

pub use gesture_canvas_coordinate::{Coordinate, DynamicCoordinate, ZoomBounds};
