// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use gesture_canvas_coordinate::Coordinate;

/// Outbound notification produced by the [`Canvas`](crate::Canvas).
///
/// Events accumulate in an internal queue and are consumed through
/// [`Canvas::drain_events`](crate::Canvas::drain_events). A host that never
/// drains simply discards state; nothing here is an error. Locations are in
/// screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasEvent {
    /// The displayed coordinate changed. Carries the coordinate to render
    /// (the limited one while an elastic gesture is live).
    CoordinateChanged(Coordinate),

    /// A pan gesture began.
    PanStarted(Point),
    /// A pan gesture moved.
    PanUpdated(Point),
    /// A pan gesture completed.
    PanEnded(Point),
    /// A pan gesture was cancelled, either by the input source or because a
    /// zoom took priority.
    PanCancelled,

    /// A zoom gesture began.
    ZoomStarted(Point),
    /// A zoom gesture produced a new scale.
    ZoomUpdated(Point),
    /// A zoom gesture completed.
    ZoomEnded(Point),
    /// A zoom gesture was cancelled by the input source.
    ZoomCancelled,

    /// A rectangular drag-selection began. Selection never touches the
    /// transform; the host interprets the raw locations.
    SelectionStarted(Point),
    /// The drag-selection pointer moved.
    SelectionUpdated(Point),
    /// The drag-selection completed.
    SelectionEnded(Point),

    /// A scroll burst began (trackpad or wheel).
    ScrollStarted,
    /// A scroll burst ended, either explicitly or via the idle timeout.
    ScrollEnded,

    /// The background was tapped.
    BackgroundTap(Point),
    /// The background was double-tapped.
    BackgroundDoubleTap(Point),

    /// A stationary secondary-button press was released; the host should
    /// present a context menu at this location.
    ContextMenuRequested(Point),
}
