// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

use gesture_canvas_animate::{Animation, Sample};
use gesture_canvas_coordinate::{Coordinate, DEFAULT_LIMIT_FACTOR, DynamicCoordinate, ZoomBounds};

use crate::event::CanvasEvent;
use crate::modifiers::Modifiers;
use crate::scroll::{
    COARSE_DELTA_MULTIPLIER, SCROLL_IDLE_TIMEOUT, SCROLL_START_THRESHOLD, ScrollMethod,
    ScrollState, classify,
};
use crate::zoom::ZoomDelta;

/// Default smallest allowed scale.
pub const DEFAULT_MINIMUM_SCALE: f64 = 0.25;

/// Default largest allowed scale.
pub const DEFAULT_MAXIMUM_SCALE: f64 = 4.0;

/// A secondary-button drag released with less total displacement than this
/// (in screen units) is a stationary click and requests a context menu.
pub const CONTEXT_MENU_DISPLACEMENT: f64 = 10.0;

/// Baseline captured when a gesture begins.
///
/// All `change` samples of the gesture are computed against this fixed
/// anchor rather than against a moving baseline, so per-event rounding error
/// does not compound.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Anchor {
    location: Point,
    coordinate: Coordinate,
}

/// The gesture arbiter: owns the canvas transform and decides which single
/// interaction may drive it at any instant.
///
/// Inbound calls are gesture phase events (`*_began` / `*_changed` /
/// `*_ended` / `*_cancelled`) from the host's input translation layer, plus
/// programmatic movers and a per-frame [`tick`](Self::tick). Outbound
/// notifications accumulate as [`CanvasEvent`]s and are consumed with
/// [`drain_events`](Self::drain_events).
///
/// Nothing here is fatal: conflicting gesture begins, non-finite input, and
/// a declining zoom policy all degrade to "the gesture did not happen".
pub struct Canvas {
    coordinate: DynamicCoordinate,
    size: Size,
    bounds: ZoomBounds,
    zoom_limiting: bool,
    limit_factor: f64,
    modifiers: Modifiers,

    is_panning: bool,
    is_zooming: bool,
    is_selecting: bool,
    pan_anchor: Option<Anchor>,
    zoom_anchor: Option<Anchor>,
    secondary_anchor: Option<Anchor>,
    scroll: Option<ScrollState>,

    animation: Option<Animation>,
    events: SmallVec<[CanvasEvent; 8]>,
    zoom_policy: Option<Box<dyn FnMut(Point) -> bool>>,
}

impl Canvas {
    /// Creates a canvas at the identity coordinate with the default zoom
    /// bounds and zoom limiting disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            coordinate: DynamicCoordinate::default(),
            size: Size::new(1.0, 1.0),
            bounds: ZoomBounds::new(Some(DEFAULT_MINIMUM_SCALE), Some(DEFAULT_MAXIMUM_SCALE)),
            zoom_limiting: false,
            limit_factor: DEFAULT_LIMIT_FACTOR,
            modifiers: Modifiers::empty(),
            is_panning: false,
            is_zooming: false,
            is_selecting: false,
            pan_anchor: None,
            zoom_anchor: None,
            secondary_anchor: None,
            scroll: None,
            animation: None,
            events: SmallVec::new(),
            zoom_policy: None,
        }
    }

    /// The coordinate to display: the elastically limited one while a
    /// gesture is live past the zoom boundary, otherwise the authoritative
    /// one.
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate.limited()
    }

    /// The authoritative, unbounded coordinate.
    #[must_use]
    pub fn unlimited_coordinate(&self) -> Coordinate {
        self.coordinate.unlimited()
    }

    /// The full limited/unlimited pair.
    #[must_use]
    pub fn dynamic_coordinate(&self) -> DynamicCoordinate {
        self.coordinate
    }

    /// The viewport size in screen units.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The configured zoom bounds.
    #[must_use]
    pub fn zoom_bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// Returns `true` while elastic zoom limiting is enabled.
    #[must_use]
    pub fn is_zoom_limiting(&self) -> bool {
        self.zoom_limiting
    }

    /// The current keyboard modifier set as last reported by the host.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Returns `true` while a pan drives the transform.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.is_panning
    }

    /// Returns `true` while a zoom drives the transform.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.is_zooming
    }

    /// Returns `true` while a drag-selection is active.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.is_selecting
    }

    /// Returns `true` while a scroll burst is live.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Returns `true` while an animation session is live.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Sets the viewport size. Non-finite or degenerate sizes are ignored.
    pub fn set_size(&mut self, size: Size) {
        if size.is_finite() && size.width > 0.0 && size.height > 0.0 {
            self.size = size;
        }
    }

    /// Sets the zoom bounds applied to gesture and programmatic scaling.
    pub fn set_zoom_bounds(&mut self, bounds: ZoomBounds) {
        self.bounds = bounds;
    }

    /// Enables or disables elastic zoom limiting.
    ///
    /// Disabling while a limited coordinate is displayed collapses it to the
    /// unlimited value immediately.
    pub fn set_zoom_limiting(&mut self, enabled: bool) {
        self.zoom_limiting = enabled;
        if !enabled && self.coordinate.is_limited() {
            self.set_coordinate(DynamicCoordinate::Unlimited(self.coordinate.unlimited()));
        }
    }

    /// Sets the elasticity used while a gesture is live, clamped to `[0, 1]`.
    pub fn set_limit_factor(&mut self, factor: f64) {
        if factor.is_finite() {
            self.limit_factor = factor.clamp(0.0, 1.0);
        }
    }

    /// Updates the keyboard modifier set used for scroll classification.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Registers a policy queried before any zoom gesture may begin.
    ///
    /// Returning `false` rejects the begin, exactly like a gesture conflict.
    /// With no policy registered, zoom is always allowed.
    pub fn set_zoom_policy<F>(&mut self, policy: F)
    where
        F: FnMut(Point) -> bool + 'static,
    {
        self.zoom_policy = Some(Box::new(policy));
    }

    /// Removes any registered zoom policy.
    pub fn clear_zoom_policy(&mut self) {
        self.zoom_policy = None;
    }

    /// Drains all pending outbound events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = CanvasEvent> + '_ {
        self.events.drain(..)
    }

    fn push(&mut self, event: CanvasEvent) {
        self.events.push(event);
    }

    /// Begins a pan gesture at `location`.
    ///
    /// Rejected while a zoom or selection is active, and while another pan
    /// already drives the transform.
    pub fn pan_began(&mut self, location: Point) {
        if !location.is_finite() {
            return;
        }
        if self.is_panning || self.is_zooming || self.is_selecting {
            return;
        }
        self.cancel_animation();
        self.pan_anchor = Some(Anchor {
            location,
            coordinate: self.coordinate.unlimited(),
        });
        self.is_panning = true;
        self.push(CanvasEvent::PanStarted(location));
    }

    /// Moves an active pan to `location`.
    pub fn pan_changed(&mut self, location: Point) {
        if !location.is_finite() {
            return;
        }
        let Some(anchor) = self.pan_anchor else {
            return;
        };
        let offset = anchor.coordinate.offset + (location - anchor.location);
        let unlimited = Coordinate::new(offset, anchor.coordinate.scale);
        self.apply_live(unlimited, self.center());
        self.push(CanvasEvent::PanUpdated(location));
    }

    /// Ends an active pan at `location`, snapping back out of the elastic
    /// zoom zone if needed.
    pub fn pan_ended(&mut self, location: Point) {
        let Some(anchor) = self.pan_anchor.take() else {
            return;
        };
        self.is_panning = false;
        self.push(CanvasEvent::PanEnded(location));
        self.snap_back(anchor.location);
    }

    /// Cancels an active pan without snap-back.
    pub fn pan_cancelled(&mut self) {
        if self.pan_anchor.take().is_none() {
            return;
        }
        self.is_panning = false;
        self.push(CanvasEvent::PanCancelled);
    }

    /// Begins a zoom gesture anchored at `location`.
    ///
    /// Rejected while a selection is active or when the registered zoom
    /// policy declines. An active pan is force-cancelled first: zoom always
    /// takes priority, and the pan-cancel notification precedes the
    /// zoom-start one.
    pub fn zoom_began(&mut self, location: Point) {
        if !location.is_finite() {
            return;
        }
        if self.is_zooming || self.is_selecting {
            return;
        }
        if let Some(policy) = &mut self.zoom_policy {
            if !policy(location) {
                return;
            }
        }
        if self.is_panning {
            self.pan_cancelled();
        }
        self.cancel_animation();
        self.zoom_anchor = Some(Anchor {
            location,
            coordinate: self.coordinate.unlimited(),
        });
        self.is_zooming = true;
        self.push(CanvasEvent::ZoomStarted(location));
    }

    /// Applies one zoom sample.
    ///
    /// `location` is the live pointer location. Pinch and scroll-zoom anchor
    /// the offset there, so content under a moving pointer stays pinned to
    /// it; double-tap-drag keeps zooming about its start location. The scale
    /// is always computed against the baseline captured at begin. Non-finite
    /// samples are dropped.
    pub fn zoom_changed(&mut self, location: Point, delta: ZoomDelta) {
        if !location.is_finite() || !delta.is_finite() {
            return;
        }
        let Some(anchor) = self.zoom_anchor else {
            return;
        };
        let current = self.coordinate.unlimited().scale;
        let scale = self
            .bounds
            .clamp(delta.unbounded_scale(anchor.coordinate.scale, current));
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }
        let anchor_location = match delta {
            ZoomDelta::DragTranslation(_) => anchor.location,
            ZoomDelta::Magnification(_) | ZoomDelta::ScrollStep(_) => location,
        };
        let magnification = scale / anchor.coordinate.scale;
        let at = anchor_location.to_vec2();
        let offset = at + (anchor.coordinate.offset - at) * magnification;
        self.apply_live(Coordinate::new(offset, scale), anchor_location);
        self.push(CanvasEvent::ZoomUpdated(location));
    }

    /// Ends an active zoom at `location`, snapping back out of the elastic
    /// zone if needed.
    pub fn zoom_ended(&mut self, location: Point) {
        let Some(anchor) = self.zoom_anchor.take() else {
            return;
        };
        self.is_zooming = false;
        self.push(CanvasEvent::ZoomEnded(location));
        self.snap_back(anchor.location);
    }

    /// Cancels an active zoom without snap-back.
    pub fn zoom_cancelled(&mut self) {
        if self.zoom_anchor.take().is_none() {
            return;
        }
        self.is_zooming = false;
        self.push(CanvasEvent::ZoomCancelled);
    }

    /// Begins a drag-selection at `location`.
    ///
    /// Only attempted when neither pan nor zoom is active; once active it
    /// blocks both until it ends. Selection never touches the transform.
    pub fn selection_began(&mut self, location: Point) {
        if !location.is_finite() {
            return;
        }
        if self.is_panning || self.is_zooming || self.is_selecting {
            return;
        }
        self.cancel_animation();
        self.is_selecting = true;
        self.push(CanvasEvent::SelectionStarted(location));
    }

    /// Forwards a drag-selection movement.
    pub fn selection_changed(&mut self, location: Point) {
        if !location.is_finite() || !self.is_selecting {
            return;
        }
        self.push(CanvasEvent::SelectionUpdated(location));
    }

    /// Ends an active drag-selection.
    pub fn selection_ended(&mut self, location: Point) {
        if !self.is_selecting {
            return;
        }
        self.is_selecting = false;
        self.push(CanvasEvent::SelectionEnded(location));
    }

    /// Begins a secondary-button drag at `location`, which also begins a
    /// pan.
    ///
    /// Rejected whenever the embedded pan would be: a secondary drag must
    /// never latch onto a gesture it did not start.
    pub fn secondary_began(&mut self, location: Point) {
        if !location.is_finite() || self.secondary_anchor.is_some() {
            return;
        }
        if self.is_panning || self.is_zooming || self.is_selecting {
            return;
        }
        self.secondary_anchor = Some(Anchor {
            location,
            coordinate: self.coordinate.unlimited(),
        });
        self.pan_began(location);
    }

    /// Moves an active secondary-button drag.
    pub fn secondary_changed(&mut self, location: Point) {
        if self.secondary_anchor.is_none() {
            return;
        }
        self.pan_changed(location);
    }

    /// Releases a secondary-button drag.
    ///
    /// A release within [`CONTEXT_MENU_DISPLACEMENT`] of the press is a
    /// stationary right-click and requests a context menu at the release
    /// location; anything farther is purely a completed pan. The associated
    /// pan always ends.
    pub fn secondary_ended(&mut self, location: Point) {
        let Some(anchor) = self.secondary_anchor.take() else {
            return;
        };
        let displacement = if location.is_finite() {
            (location - anchor.location).hypot()
        } else {
            f64::INFINITY
        };
        self.pan_ended(location);
        if displacement < CONTEXT_MENU_DISPLACEMENT {
            self.push(CanvasEvent::ContextMenuRequested(location));
        }
    }

    /// Feeds one scroll sample (trackpad or mouse wheel).
    ///
    /// `precise` distinguishes trackpad deltas from coarse wheel clicks;
    /// coarse deltas are amplified and always zoom. A burst starts once a
    /// sample exceeds the start threshold, reclassifies cleanly when the
    /// zoom condition changes mid-stream, and auto-ends when
    /// [`tick`](Self::tick) observes the idle timeout.
    pub fn scroll_wheel(&mut self, location: Point, delta: Vec2, precise: bool, now: f64) {
        if !location.is_finite() || !delta.is_finite() || !now.is_finite() {
            return;
        }
        let delta = if precise {
            delta
        } else {
            delta * COARSE_DELTA_MULTIPLIER
        };
        let method = classify(self.modifiers, precise);

        match self.scroll {
            None => {
                if delta.x.abs().max(delta.y.abs()) <= SCROLL_START_THRESHOLD {
                    return;
                }
                if !self.begin_scroll_sub(method, location) {
                    return;
                }
                self.scroll = Some(ScrollState {
                    method,
                    deadline: now + SCROLL_IDLE_TIMEOUT,
                    translation: Vec2::ZERO,
                    last_location: location,
                });
                self.push(CanvasEvent::ScrollStarted);
            }
            Some(state) if state.method != method => {
                // Reclassified mid-burst: end the old sub-gesture cleanly
                // before starting the new one.
                self.end_scroll_sub(state.method, location);
                if self.begin_scroll_sub(method, location) {
                    self.scroll = Some(ScrollState {
                        method,
                        deadline: now + SCROLL_IDLE_TIMEOUT,
                        translation: Vec2::ZERO,
                        last_location: location,
                    });
                } else {
                    self.scroll = None;
                    self.push(CanvasEvent::ScrollEnded);
                    return;
                }
            }
            Some(_) => {}
        }

        let Some(mut state) = self.scroll else {
            return;
        };
        state.deadline = now + SCROLL_IDLE_TIMEOUT;
        state.translation += delta;
        state.last_location = location;
        self.scroll = Some(state);

        match state.method {
            ScrollMethod::Pan => {
                if let Some(anchor) = self.pan_anchor {
                    self.pan_changed(anchor.location + state.translation);
                }
            }
            ScrollMethod::Zoom => self.zoom_changed(location, ZoomDelta::ScrollStep(delta.y)),
        }
    }

    fn begin_scroll_sub(&mut self, method: ScrollMethod, location: Point) -> bool {
        match method {
            ScrollMethod::Pan => {
                self.pan_began(location);
                self.is_panning
            }
            ScrollMethod::Zoom => {
                self.zoom_began(location);
                self.is_zooming
            }
        }
    }

    fn end_scroll_sub(&mut self, method: ScrollMethod, location: Point) {
        match method {
            ScrollMethod::Pan => self.pan_ended(location),
            ScrollMethod::Zoom => self.zoom_ended(location),
        }
    }

    fn tick_scroll(&mut self, now: f64) {
        let Some(state) = self.scroll else {
            return;
        };
        if now < state.deadline {
            return;
        }
        self.scroll = None;
        self.end_scroll_sub(state.method, state.last_location);
        self.push(CanvasEvent::ScrollEnded);
    }

    /// Reports a background tap.
    pub fn background_tap(&mut self, location: Point) {
        if location.is_finite() {
            self.push(CanvasEvent::BackgroundTap(location));
        }
    }

    /// Reports a background double-tap.
    pub fn background_double_tap(&mut self, location: Point) {
        if location.is_finite() {
            self.push(CanvasEvent::BackgroundDoubleTap(location));
        }
    }

    /// Moves directly to `coordinate`, cancelling any running animation.
    pub fn move_to(&mut self, coordinate: Coordinate) {
        if !coordinate.is_finite() || coordinate.scale <= 0.0 {
            return;
        }
        self.cancel_animation();
        self.set_coordinate(DynamicCoordinate::Unlimited(coordinate));
    }

    /// Translates the current coordinate by `delta` screen units.
    pub fn offset_by(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        let mut coordinate = self.coordinate.unlimited();
        coordinate.offset += delta;
        self.move_to(coordinate);
    }

    /// Scales the current coordinate by `factor` about the viewport center,
    /// clamped to the zoom bounds.
    pub fn scale_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let current = self.coordinate.unlimited();
        let scale = self.bounds.clamp(current.scale * factor);
        let center = self.center().to_vec2();
        let magnification = scale / current.scale;
        let offset = center + (current.offset - center) * magnification;
        self.move_to(Coordinate::new(offset, scale));
    }

    /// Starts animating towards `target`, superseding any running session.
    ///
    /// With `auto_limit` set and zoom limiting enabled, the target is
    /// hard-limited about the viewport center before interpolation begins.
    /// The host observes completion by driving [`tick`](Self::tick) until
    /// [`is_animating`](Self::is_animating) turns false; the final tick sets
    /// exactly the target coordinate.
    pub fn animate_to(&mut self, target: Coordinate, auto_limit: bool) {
        if !target.is_finite() || target.scale <= 0.0 {
            return;
        }
        let target = if auto_limit && self.zoom_limiting {
            target.hard_limited(self.center(), self.bounds)
        } else {
            target
        };
        self.cancel_animation();
        self.animation = Some(Animation::new(self.coordinate.limited(), target));
    }

    /// Advances time-driven state: the scroll idle timeout and the animation
    /// session. `now` is in seconds from an arbitrary monotonic origin, the
    /// same timebase passed to [`scroll_wheel`](Self::scroll_wheel).
    pub fn tick(&mut self, now: f64) {
        if !now.is_finite() {
            return;
        }
        self.tick_scroll(now);
        if let Some(mut animation) = self.animation.take() {
            match animation.advance(now) {
                Sample::Active(sample) => {
                    self.animation = Some(animation);
                    self.set_coordinate(DynamicCoordinate::Unlimited(sample));
                }
                Sample::Finished(target) => {
                    self.set_coordinate(DynamicCoordinate::Unlimited(target));
                }
                Sample::Cancelled => {}
            }
        }
    }

    fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    fn cancel_animation(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.cancel();
        }
    }

    /// Stores a gesture-produced unlimited coordinate, pairing it with a
    /// soft-limited display coordinate while limiting applies.
    fn apply_live(&mut self, unlimited: Coordinate, anchor: Point) {
        let dynamic = if self.zoom_limiting && unlimited.scale > 1.0 {
            DynamicCoordinate::Limited {
                limited: unlimited.soft_limited(anchor, self.limit_factor, self.bounds),
                unlimited,
            }
        } else {
            DynamicCoordinate::Unlimited(unlimited)
        };
        self.set_coordinate(dynamic);
    }

    /// Schedules the hard-limit snap-back animation after a gesture ends in
    /// the elastic zone.
    fn snap_back(&mut self, anchor: Point) {
        if !self.zoom_limiting {
            return;
        }
        let unlimited = self.coordinate.unlimited();
        if unlimited.scale <= 1.0 {
            return;
        }
        let target = unlimited.hard_limited(anchor, self.bounds);
        self.cancel_animation();
        self.animation = Some(Animation::new(self.coordinate.limited(), target));
    }

    fn set_coordinate(&mut self, coordinate: DynamicCoordinate) {
        self.coordinate = coordinate;
        self.push(CanvasEvent::CoordinateChanged(coordinate.limited()));
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("coordinate", &self.coordinate)
            .field("size", &self.size)
            .field("bounds", &self.bounds)
            .field("zoom_limiting", &self.zoom_limiting)
            .field("limit_factor", &self.limit_factor)
            .field("modifiers", &self.modifiers)
            .field("is_panning", &self.is_panning)
            .field("is_zooming", &self.is_zooming)
            .field("is_selecting", &self.is_selecting)
            .field("is_scrolling", &self.scroll.is_some())
            .field("is_animating", &self.animation.is_some())
            .finish_non_exhaustive()
    }
}
