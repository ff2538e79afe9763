// Host-side tests for the pure gesture classifier.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod gesture {
    include!("../src/gesture.rs");
}

use gesture::*;

fn pt(x: f32, y: f32) -> TouchPoint {
    TouchPoint { x, y }
}

fn rotate_delta(events: &GestureEvents) -> Option<(f32, f32)> {
    events.iter().find_map(|ev| match ev {
        GestureEvent::RotateDelta { dx, dy } => Some((*dx, *dy)),
        _ => None,
    })
}

fn has(events: &GestureEvents, wanted: GestureEvent) -> bool {
    events.iter().any(|ev| *ev == wanted)
}

#[test]
fn mouse_drag_emits_scaled_deltas() {
    let mut t = GestureInputTracker::new();
    let down = t.on_pointer_down(0.0, 0.0);
    assert!(has(&down, GestureEvent::DragStart));

    let moved = t.on_pointer_move(100.0, 0.0);
    let (dx, dy) = rotate_delta(&moved).expect("rotate delta");
    assert!((dx - 1.0).abs() < 1e-6); // 100 px * 0.01 rad/px
    assert!(dy.abs() < 1e-6);

    let moved = t.on_pointer_move(110.0, 20.0);
    let (dx, dy) = rotate_delta(&moved).expect("rotate delta");
    assert!((dx - 0.1).abs() < 1e-6);
    assert!((dy - 0.2).abs() < 1e-6);

    let up = t.on_pointer_up();
    assert!(has(&up, GestureEvent::DragEnd));
}

#[test]
fn manual_rotation_announced_once_per_session() {
    let mut t = GestureInputTracker::new();
    t.on_pointer_down(0.0, 0.0);
    let first = t.on_pointer_move(10.0, 0.0);
    assert!(has(&first, GestureEvent::ManualRotationStarted));
    let second = t.on_pointer_move(20.0, 0.0);
    assert!(!has(&second, GestureEvent::ManualRotationStarted));
    t.on_pointer_up();

    // A new session announces again.
    t.on_pointer_down(0.0, 0.0);
    let third = t.on_pointer_move(5.0, 0.0);
    assert!(has(&third, GestureEvent::ManualRotationStarted));
}

#[test]
fn move_without_press_is_ignored() {
    let mut t = GestureInputTracker::new();
    assert!(t.on_pointer_move(50.0, 50.0).is_empty());
    assert!(t.on_pointer_up().is_empty());
}

#[test]
fn pointer_leave_is_an_implicit_drag_end() {
    let mut t = GestureInputTracker::new();
    t.on_pointer_down(0.0, 0.0);
    let left = t.on_pointer_leave();
    assert!(has(&left, GestureEvent::DragEnd));
    // Session is gone; further moves are stale.
    assert!(t.on_pointer_move(100.0, 100.0).is_empty());
}

#[test]
fn wheel_uses_coarse_fixed_steps() {
    let mut t = GestureInputTracker::new();
    let out = t.on_wheel(5.0);
    assert!(has(&out, GestureEvent::ZoomScale { factor: 1.1 }));
    let inward = t.on_wheel(-3.0);
    assert!(has(&inward, GestureEvent::ZoomScale { factor: 0.9 }));
}

#[test]
fn touch_rotate_uses_touch_sensitivity() {
    let mut t = GestureInputTracker::new();
    t.on_touch_start(&[pt(0.0, 0.0)], 0.0);
    let moved = t.on_touch_move(&[pt(10.0, -20.0)]);
    assert!(has(&moved, GestureEvent::ManualRotationStarted));
    let (dx, dy) = rotate_delta(&moved).expect("rotate delta");
    assert!((dx - 0.15).abs() < 1e-6); // 10 px * 0.015 rad/px
    assert!((dy + 0.3).abs() < 1e-6);
}

#[test]
fn pinch_emits_fixed_steps_not_proportional() {
    let mut t = GestureInputTracker::new();
    t.on_touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)], 0.0);

    // Fingers spreading far: still the fixed zoom-in step.
    let spread = t.on_touch_move(&[pt(0.0, 0.0), pt(400.0, 0.0)]);
    assert!(has(&spread, GestureEvent::ZoomScale { factor: 0.95 }));

    // Baseline updated to 400; closing slightly is the zoom-out step.
    let closed = t.on_touch_move(&[pt(0.0, 0.0), pt(390.0, 0.0)]);
    assert!(has(&closed, GestureEvent::ZoomScale { factor: 1.05 }));
}

#[test]
fn zero_pinch_baseline_suppresses_zoom() {
    let mut t = GestureInputTracker::new();
    // Both touches at the same point: baseline distance is zero.
    t.on_touch_start(&[pt(50.0, 50.0), pt(50.0, 50.0)], 0.0);
    let first = t.on_touch_move(&[pt(0.0, 50.0), pt(100.0, 50.0)]);
    assert!(first.is_empty());
    // The non-zero distance became the new baseline; zoom resumes.
    let second = t.on_touch_move(&[pt(0.0, 50.0), pt(200.0, 50.0)]);
    assert!(has(&second, GestureEvent::ZoomScale { factor: 0.95 }));
}

#[test]
fn second_touch_suppresses_rotation_until_released() {
    let mut t = GestureInputTracker::new();
    t.on_touch_start(&[pt(0.0, 0.0)], 0.0);
    assert!(rotate_delta(&t.on_touch_move(&[pt(10.0, 0.0)])).is_some());

    t.on_touch_start(&[pt(10.0, 0.0), pt(100.0, 0.0)], 50.0);
    // Single-point moves while two touches are tracked do not rotate.
    assert!(rotate_delta(&t.on_touch_move(&[pt(30.0, 0.0)])).is_none());

    // One finger lifts (slow, so no tap bookkeeping); the survivor at
    // (50, 50) becomes the new rotate anchor.
    let end = t.on_touch_end(&[pt(50.0, 50.0)], 1, 5000.0);
    assert!(!has(&end, GestureEvent::DragEnd));

    let resumed = t.on_touch_move(&[pt(60.0, 50.0)]);
    let (dx, dy) = rotate_delta(&resumed).expect("rotation resumes");
    // Anchored at the survivor, not at stale pre-pinch coordinates.
    assert!((dx - 0.15).abs() < 1e-6);
    assert!(dy.abs() < 1e-6);
}

#[test]
fn quick_tap_pair_is_a_double_tap() {
    let mut t = GestureInputTracker::new();

    // First tap: 100 ms press, ordinary release.
    t.on_touch_start(&[pt(5.0, 5.0)], 0.0);
    let first = t.on_touch_end(&[], 1, 100.0);
    assert!(has(&first, GestureEvent::DragEnd));
    assert!(!has(&first, GestureEvent::DoubleTap));

    // Second tap: 100 ms press released 200 ms after the first release.
    t.on_touch_start(&[pt(5.0, 5.0)], 200.0);
    let second = t.on_touch_end(&[], 1, 300.0);
    assert!(has(&second, GestureEvent::DoubleTap));
    // No extra DragEnd rides along with the double tap.
    assert!(!has(&second, GestureEvent::DragEnd));
    assert_eq!(second.len(), 1);
}

#[test]
fn slow_press_never_double_taps() {
    let mut t = GestureInputTracker::new();
    t.on_touch_start(&[pt(5.0, 5.0)], 0.0);
    let slow = t.on_touch_end(&[], 1, 500.0);
    assert!(has(&slow, GestureEvent::DragEnd));
    assert!(!has(&slow, GestureEvent::DoubleTap));

    // A quick tap right after has no candidate to pair with.
    t.on_touch_start(&[pt(5.0, 5.0)], 600.0);
    let quick = t.on_touch_end(&[], 1, 700.0);
    assert!(!has(&quick, GestureEvent::DoubleTap));
}

#[test]
fn tap_pair_outside_gap_window_is_not_a_double_tap() {
    let mut t = GestureInputTracker::new();
    t.on_touch_start(&[pt(5.0, 5.0)], 0.0);
    t.on_touch_end(&[], 1, 100.0);
    // Second quick tap, but 450 ms after the first release.
    t.on_touch_start(&[pt(5.0, 5.0)], 450.0);
    let second = t.on_touch_end(&[], 1, 550.0);
    assert!(!has(&second, GestureEvent::DoubleTap));
}

#[test]
fn double_tap_bookkeeping_survives_a_pinch() {
    let mut t = GestureInputTracker::new();
    // Quick tap leaves a candidate at t=100.
    t.on_touch_start(&[pt(5.0, 5.0)], 0.0);
    t.on_touch_end(&[], 1, 100.0);

    // A short pinch intervenes.
    t.on_touch_start(&[pt(0.0, 0.0), pt(50.0, 0.0)], 150.0);
    t.on_touch_end(&[], 2, 180.0);

    // Quick tap within the 400 ms gap still pairs with the candidate.
    t.on_touch_start(&[pt(5.0, 5.0)], 200.0);
    let end = t.on_touch_end(&[], 1, 290.0);
    assert!(has(&end, GestureEvent::DoubleTap));
}

#[test]
fn malformed_touch_lists_are_dropped() {
    let mut t = GestureInputTracker::new();
    assert!(t.on_touch_start(&[], 0.0).is_empty());
    assert!(t.on_touch_move(&[]).is_empty());
    assert!(t
        .on_touch_start(&[pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)], 0.0)
        .is_empty());
    // No session was ever opened, so nothing to end.
    assert!(t.on_touch_end(&[], 0, 10.0).is_empty());
}
