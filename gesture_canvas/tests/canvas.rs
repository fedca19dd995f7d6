// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end arbitration tests driven through the public [`Canvas`] API.

use kurbo::{Point, Size, Vec2};

use gesture_canvas::{
    Canvas, CanvasEvent, Coordinate, Modifiers, SCROLL_ZOOM_MULTIPLIER, ZoomBounds, ZoomDelta,
};

fn canvas() -> Canvas {
    let mut canvas = Canvas::new();
    canvas.set_size(Size::new(800.0, 600.0));
    canvas
}

fn events(canvas: &mut Canvas) -> Vec<CanvasEvent> {
    canvas.drain_events().collect()
}

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}

#[test]
fn pan_translates_by_the_pointer_movement() {
    let mut canvas = canvas();

    canvas.pan_began(Point::new(100.0, 100.0));
    canvas.pan_changed(Point::new(150.0, 130.0));

    let coordinate = canvas.coordinate();
    assert_eq!(coordinate.offset, Vec2::new(50.0, 30.0));
    assert_eq!(coordinate.scale, 1.0);

    canvas.pan_ended(Point::new(150.0, 130.0));
    assert!(!canvas.is_panning());
}

#[test]
fn pan_changes_are_relative_to_the_begin_baseline() {
    let mut canvas = canvas();
    canvas.move_to(Coordinate::new(Vec2::new(10.0, 10.0), 1.0));

    canvas.pan_began(Point::new(0.0, 0.0));
    // Repeating the same location must not accumulate.
    canvas.pan_changed(Point::new(30.0, 0.0));
    canvas.pan_changed(Point::new(30.0, 0.0));
    assert_eq!(canvas.coordinate().offset, Vec2::new(40.0, 10.0));
}

#[test]
fn pinch_zoom_clamps_to_bounds_and_preserves_the_anchor() {
    let mut canvas = canvas();
    canvas.set_zoom_bounds(ZoomBounds::new(Some(0.25), Some(4.0)));
    canvas.move_to(Coordinate::new(Vec2::ZERO, 2.0));

    let anchor = Point::new(400.0, 300.0);
    let before = canvas.coordinate().position(anchor);

    canvas.zoom_began(anchor);
    canvas.zoom_changed(anchor, ZoomDelta::Magnification(1.5));

    let coordinate = canvas.coordinate();
    assert_eq!(coordinate.scale, 3.0);
    assert_close(coordinate.position(anchor), before);

    // Pinching far past the maximum clamps there, still anchored.
    canvas.zoom_changed(anchor, ZoomDelta::Magnification(100.0));
    let coordinate = canvas.coordinate();
    assert_eq!(coordinate.scale, 4.0);
    assert_close(coordinate.position(anchor), before);
}

#[test]
fn pinch_keeps_content_pinned_under_a_moving_pointer() {
    let mut canvas = canvas();

    canvas.zoom_began(Point::new(400.0, 300.0));

    // The pointer has moved since begin; the content under its live
    // location must not drift as the sample lands.
    let pointer = Point::new(500.0, 350.0);
    let before = canvas.coordinate().position(pointer);
    canvas.zoom_changed(pointer, ZoomDelta::Magnification(2.0));

    assert_eq!(canvas.coordinate().scale, 2.0);
    assert_close(canvas.coordinate().position(pointer), before);
}

#[test]
fn scroll_zoom_follows_the_live_pointer() {
    let mut canvas = canvas();
    canvas.set_zoom_bounds(ZoomBounds::UNBOUNDED);

    let begin = canvas.coordinate();
    canvas.scroll_wheel(Point::new(100.0, 100.0), Vec2::new(0.0, 2.0), false, 0.0);

    // A later sample at a different location anchors there, not at the
    // burst's begin location: the content that was under the live pointer
    // when the burst began stays under it.
    let pointer = Point::new(300.0, 240.0);
    canvas.scroll_wheel(pointer, Vec2::new(0.0, 2.0), false, 0.05);

    assert!(canvas.coordinate().scale > 1.0);
    assert_close(canvas.coordinate().position(pointer), begin.position(pointer));
}

#[test]
fn double_tap_drag_zooms_exponentially_about_its_start_location() {
    let mut canvas = canvas();
    let anchor = Point::new(300.0, 200.0);
    let before = canvas.coordinate().position(anchor);

    canvas.zoom_began(anchor);
    // Dragging up zooms in.
    canvas.zoom_changed(anchor, ZoomDelta::DragTranslation(-100.0));

    let coordinate = canvas.coordinate();
    assert!((coordinate.scale - f64::exp(0.5)).abs() < 1e-12);
    assert_close(coordinate.position(anchor), before);

    // The pointer necessarily moves during the drag, but this source keeps
    // zooming about where the drag began.
    canvas.zoom_changed(Point::new(300.0, 380.0), ZoomDelta::DragTranslation(-180.0));
    assert_close(canvas.coordinate().position(anchor), before);
}

#[test]
fn zoom_begin_cancels_an_active_pan_in_order() {
    let mut canvas = canvas();

    canvas.pan_began(Point::new(10.0, 10.0));
    canvas.zoom_began(Point::new(20.0, 20.0));

    assert!(!canvas.is_panning());
    assert!(canvas.is_zooming());
    assert_eq!(
        events(&mut canvas),
        [
            CanvasEvent::PanStarted(Point::new(10.0, 10.0)),
            CanvasEvent::PanCancelled,
            CanvasEvent::ZoomStarted(Point::new(20.0, 20.0)),
        ]
    );
}

#[test]
fn pan_begin_is_rejected_while_zooming() {
    let mut canvas = canvas();
    canvas.zoom_began(Point::new(0.0, 0.0));
    canvas.drain_events().count();

    canvas.pan_began(Point::new(5.0, 5.0));
    assert!(!canvas.is_panning());
    assert!(events(&mut canvas).is_empty());
}

#[test]
fn selection_blocks_pan_and_zoom_until_it_ends() {
    let mut canvas = canvas();

    canvas.selection_began(Point::new(5.0, 5.0));
    canvas.pan_began(Point::new(6.0, 6.0));
    canvas.zoom_began(Point::new(7.0, 7.0));
    assert!(canvas.is_selecting());
    assert!(!canvas.is_panning());
    assert!(!canvas.is_zooming());

    canvas.selection_changed(Point::new(50.0, 60.0));
    canvas.selection_ended(Point::new(50.0, 60.0));
    assert_eq!(
        events(&mut canvas),
        [
            CanvasEvent::SelectionStarted(Point::new(5.0, 5.0)),
            CanvasEvent::SelectionUpdated(Point::new(50.0, 60.0)),
            CanvasEvent::SelectionEnded(Point::new(50.0, 60.0)),
        ]
    );

    // Selection never touches the transform, and pan works again afterwards.
    assert_eq!(canvas.coordinate(), Coordinate::IDENTITY);
    canvas.pan_began(Point::new(0.0, 0.0));
    assert!(canvas.is_panning());
}

#[test]
fn zoom_policy_can_veto_a_zoom_begin() {
    let mut canvas = canvas();
    canvas.set_zoom_policy(|_| false);

    canvas.zoom_began(Point::new(0.0, 0.0));
    assert!(!canvas.is_zooming());
    assert!(events(&mut canvas).is_empty());

    canvas.clear_zoom_policy();
    canvas.zoom_began(Point::new(0.0, 0.0));
    assert!(canvas.is_zooming());
}

#[test]
fn stationary_secondary_release_requests_a_context_menu() {
    let mut canvas = canvas();

    canvas.secondary_began(Point::new(100.0, 100.0));
    canvas.secondary_changed(Point::new(109.9, 100.0));
    canvas.secondary_ended(Point::new(109.9, 100.0));

    let events = events(&mut canvas);
    assert!(
        events.contains(&CanvasEvent::ContextMenuRequested(Point::new(109.9, 100.0))),
        "displacement 9.9 should request a menu: {events:?}"
    );
    assert!(!canvas.is_panning());
}

#[test]
fn moved_secondary_release_is_purely_a_pan() {
    let mut canvas = canvas();

    canvas.secondary_began(Point::new(100.0, 100.0));
    canvas.secondary_changed(Point::new(250.0, 100.0));
    canvas.secondary_ended(Point::new(250.0, 100.0));

    let events = events(&mut canvas);
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, CanvasEvent::ContextMenuRequested(_))),
        "displacement 150 should not request a menu: {events:?}"
    );
    // The drag still panned the canvas.
    assert_eq!(canvas.coordinate().offset, Vec2::new(150.0, 0.0));
}

#[test]
fn secondary_drag_is_rejected_while_a_selection_is_active() {
    let mut canvas = canvas();

    canvas.selection_began(Point::new(5.0, 5.0));
    canvas.drain_events().count();

    canvas.secondary_began(Point::new(100.0, 100.0));
    canvas.secondary_ended(Point::new(100.0, 100.0));

    // Neither a pan nor a stationary-release menu may come out of it.
    assert!(canvas.is_selecting());
    assert!(!canvas.is_panning());
    assert!(events(&mut canvas).is_empty());
}

#[test]
fn secondary_drag_does_not_latch_onto_another_pan() {
    let mut canvas = canvas();

    canvas.pan_began(Point::new(0.0, 0.0));
    canvas.pan_changed(Point::new(10.0, 0.0));

    canvas.secondary_began(Point::new(50.0, 50.0));
    canvas.secondary_changed(Point::new(90.0, 50.0));
    canvas.secondary_ended(Point::new(90.0, 50.0));

    // The pre-existing pan is untouched and still live.
    assert!(canvas.is_panning());
    assert_eq!(canvas.coordinate().offset, Vec2::new(10.0, 0.0));
    assert!(
        !events(&mut canvas)
            .iter()
            .any(|event| matches!(event, CanvasEvent::ContextMenuRequested(_)))
    );
}

#[test]
fn secondary_release_just_past_the_threshold_requests_no_menu() {
    let mut canvas = canvas();
    canvas.secondary_began(Point::new(0.0, 0.0));
    canvas.secondary_ended(Point::new(10.1, 0.0));
    assert!(
        !events(&mut canvas)
            .iter()
            .any(|event| matches!(event, CanvasEvent::ContextMenuRequested(_)))
    );
}

#[test]
fn precise_scrolling_pans_and_auto_ends_after_the_idle_timeout() {
    let mut canvas = canvas();

    canvas.scroll_wheel(Point::new(200.0, 200.0), Vec2::new(0.0, 30.0), true, 0.0);
    assert!(canvas.is_scrolling());
    assert!(canvas.is_panning());
    assert_eq!(canvas.coordinate().offset, Vec2::new(0.0, 30.0));

    canvas.scroll_wheel(Point::new(200.0, 200.0), Vec2::new(10.0, 0.0), true, 0.05);
    assert_eq!(canvas.coordinate().offset, Vec2::new(10.0, 30.0));

    // Still within the timeout of the last sample.
    canvas.tick(0.1);
    assert!(canvas.is_scrolling());

    canvas.tick(0.21);
    assert!(!canvas.is_scrolling());
    assert!(!canvas.is_panning());

    let events = events(&mut canvas);
    assert!(events.contains(&CanvasEvent::ScrollStarted));
    assert!(events.contains(&CanvasEvent::ScrollEnded));
}

#[test]
fn scroll_samples_below_the_threshold_do_not_start_a_burst() {
    let mut canvas = canvas();
    canvas.scroll_wheel(Point::new(0.0, 0.0), Vec2::new(1.0, 1.0), true, 0.0);
    assert!(!canvas.is_scrolling());
    assert!(events(&mut canvas).is_empty());
}

#[test]
fn coarse_scroll_deltas_zoom_with_amplified_steps() {
    let mut canvas = canvas();

    canvas.scroll_wheel(Point::new(400.0, 300.0), Vec2::new(0.0, 2.0), false, 0.0);
    assert!(canvas.is_zooming());

    // 2.0 amplified by the coarse multiplier, integrated once.
    let expected = 1.0 + 20.0 * SCROLL_ZOOM_MULTIPLIER;
    assert!((canvas.coordinate().scale - expected).abs() < 1e-12);
}

#[test]
fn command_scrolling_zooms_and_reclassifies_mid_burst() {
    let mut canvas = canvas();

    canvas.scroll_wheel(Point::new(100.0, 100.0), Vec2::new(0.0, 10.0), true, 0.0);
    assert!(canvas.is_panning());
    canvas.drain_events().count();

    // The modifier changes mid-stream: the pan sub-gesture ends cleanly and
    // a zoom one starts, within the same burst.
    canvas.set_modifiers(Modifiers::COMMAND);
    canvas.scroll_wheel(Point::new(100.0, 100.0), Vec2::new(0.0, 10.0), true, 0.05);

    assert!(canvas.is_scrolling());
    assert!(!canvas.is_panning());
    assert!(canvas.is_zooming());

    let events = events(&mut canvas);
    let end = events
        .iter()
        .position(|event| matches!(event, CanvasEvent::PanEnded(_)))
        .expect("pan should end on reclassification");
    let start = events
        .iter()
        .position(|event| matches!(event, CanvasEvent::ZoomStarted(_)))
        .expect("zoom should start on reclassification");
    assert!(end < start, "pan must end before zoom starts: {events:?}");
    assert!(!events.contains(&CanvasEvent::ScrollEnded));
}

#[test]
fn non_finite_samples_are_dropped_silently() {
    let mut canvas = canvas();

    canvas.pan_began(Point::new(0.0, 0.0));
    canvas.drain_events().count();

    canvas.pan_changed(Point::new(f64::NAN, 10.0));
    assert_eq!(canvas.coordinate(), Coordinate::IDENTITY);
    assert!(events(&mut canvas).is_empty());

    canvas.pan_cancelled();
    canvas.drain_events().count();

    canvas.zoom_began(Point::new(0.0, 0.0));
    canvas.zoom_changed(Point::new(0.0, 0.0), ZoomDelta::Magnification(f64::NAN));
    canvas.zoom_changed(Point::new(0.0, 0.0), ZoomDelta::ScrollStep(f64::INFINITY));
    assert_eq!(canvas.coordinate(), Coordinate::IDENTITY);
}

#[test]
fn animation_interpolates_and_lands_exactly_on_the_target() {
    let mut canvas = canvas();
    let target = Coordinate::new(Vec2::new(100.0, 0.0), 2.0);

    canvas.animate_to(target, false);
    assert!(canvas.is_animating());

    canvas.tick(0.0);
    assert_eq!(canvas.coordinate(), Coordinate::IDENTITY);

    canvas.tick(0.165);
    let mid = canvas.coordinate();
    assert!(mid.offset.x > 0.0 && mid.offset.x < 100.0, "{mid:?}");
    assert!(mid.scale > 1.0 && mid.scale < 2.0, "{mid:?}");

    canvas.tick(0.33);
    assert_eq!(canvas.coordinate(), target);
    assert!(!canvas.is_animating());
}

#[test]
fn a_new_gesture_supersedes_a_running_animation() {
    let mut canvas = canvas();
    canvas.animate_to(Coordinate::new(Vec2::new(100.0, 100.0), 1.0), false);
    canvas.tick(0.0);
    canvas.tick(0.1);
    let interrupted = canvas.coordinate();

    canvas.pan_began(Point::new(0.0, 0.0));
    assert!(!canvas.is_animating());
    // The transform stays where the animation left it; the target is never
    // forced.
    assert_eq!(canvas.coordinate(), interrupted);
    assert_ne!(interrupted.offset, Vec2::new(100.0, 100.0));
}

#[test]
fn elastic_zoom_shows_resistance_and_snaps_back_on_end() {
    let mut canvas = canvas();
    canvas.set_zoom_limiting(true);
    canvas.set_zoom_bounds(ZoomBounds::UNBOUNDED);

    let anchor = Point::new(400.0, 300.0);
    canvas.zoom_began(anchor);
    canvas.zoom_changed(anchor, ZoomDelta::Magnification(3.0));

    // The gesture's true scale is 3, but the displayed one is compressed:
    // 1 + (3 - 1) * 0.25.
    assert_eq!(canvas.unlimited_coordinate().scale, 3.0);
    assert_eq!(canvas.coordinate().scale, 1.5);
    assert!(canvas.dynamic_coordinate().is_limited());

    // Ending schedules the hard-limit snap-back.
    canvas.zoom_ended(anchor);
    assert!(canvas.is_animating());

    canvas.tick(0.0);
    canvas.tick(1.0);
    assert!(!canvas.is_animating());

    // Zoomed in about the viewport center from identity, the snap-back
    // returns exactly to identity.
    assert_eq!(canvas.coordinate(), Coordinate::IDENTITY);
    assert!(!canvas.dynamic_coordinate().is_limited());
}

#[test]
fn pan_in_the_elastic_zone_snaps_back_on_end() {
    let mut canvas = canvas();
    canvas.set_zoom_limiting(true);
    canvas.set_zoom_bounds(ZoomBounds::UNBOUNDED);

    // Leave the canvas in the elastic zone via an interrupted zoom.
    let anchor = Point::new(400.0, 300.0);
    canvas.zoom_began(anchor);
    canvas.zoom_changed(anchor, ZoomDelta::Magnification(2.0));
    canvas.zoom_ended(anchor);

    // A pan begin cancels the snap-back; its own end reschedules one.
    canvas.pan_began(Point::new(100.0, 100.0));
    assert!(!canvas.is_animating());
    canvas.pan_changed(Point::new(120.0, 100.0));
    assert!(canvas.unlimited_coordinate().scale > 1.0);

    canvas.pan_ended(Point::new(120.0, 100.0));
    assert!(canvas.is_animating());
    canvas.tick(0.0);
    canvas.tick(1.0);
    assert_eq!(canvas.coordinate().scale, 1.0);
}

#[test]
fn animate_to_can_pre_limit_its_target() {
    let mut canvas = canvas();
    canvas.set_zoom_limiting(true);
    canvas.set_zoom_bounds(ZoomBounds::UNBOUNDED);

    canvas.animate_to(Coordinate::new(Vec2::ZERO, 3.0), true);
    canvas.tick(0.0);
    canvas.tick(1.0);
    assert_eq!(canvas.coordinate().scale, 1.0);
}

#[test]
fn fitting_a_frame_can_be_animated_like_any_other_move() {
    let mut canvas = canvas();
    let frame = kurbo::Rect::new(0.0, 0.0, 400.0, 300.0);
    let fitted = Coordinate::fitting(frame, 0.0, canvas.size());

    canvas.animate_to(fitted, false);
    canvas.tick(0.0);
    canvas.tick(1.0);

    assert_eq!(canvas.coordinate(), fitted);
    assert_close(canvas.coordinate().location(frame.center()), Point::new(400.0, 300.0));
}
