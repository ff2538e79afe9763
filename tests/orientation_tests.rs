// Host-side tests for the pure orientation controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod gesture {
    include!("../src/gesture.rs");
}
mod orientation {
    include!("../src/orientation.rs");
}

use gesture::{GestureEvent, GestureInputTracker};
use orientation::*;
use std::cell::Cell;
use std::rc::Rc;

/// Counts autopilot-disabled notifications through a shared cell so the
/// test keeps a handle after the controller takes ownership of the sink.
#[derive(Clone, Default)]
struct RecordingUi {
    disabled: Rc<Cell<usize>>,
}

impl UiSink for RecordingUi {
    fn notify_auto_rotate_disabled(&mut self) {
        self.disabled.set(self.disabled.get() + 1);
    }
}

#[derive(Default)]
struct RecordingRender {
    orientation: (f32, f32),
    distance: f32,
}

impl RenderSink for RecordingRender {
    fn apply_orientation(&mut self, rotation_x: f32, rotation_y: f32) {
        self.orientation = (rotation_x, rotation_y);
    }

    fn apply_zoom(&mut self, distance: f32) {
        self.distance = distance;
    }
}

fn controller() -> OrientationController<RecordingUi> {
    OrientationController::new(RecordingUi::default())
}

#[test]
fn stationary_without_autopilot_or_input() {
    let mut c = controller();
    c.set_auto_rotate(false);
    for _ in 0..50 {
        c.advance();
    }
    let r = c.rotation();
    assert_eq!(r.current_x, 0.0);
    assert_eq!(r.current_y, 0.0);
    assert_eq!(r.target_x, 0.0);
    assert_eq!(r.target_y, 0.0);
}

#[test]
fn rotate_delta_accumulates_into_targets_verbatim() {
    let mut c = controller();
    c.set_auto_rotate(false);
    // Horizontal motion drives yaw (Y), vertical drives pitch (X).
    c.apply(GestureEvent::RotateDelta { dx: 1.0, dy: 0.0 });
    let r = c.rotation();
    assert_eq!(r.target_y, 1.0);
    assert_eq!(r.target_x, 0.0);
    assert_eq!(r.current_y, 0.0);

    c.apply(GestureEvent::RotateDelta { dx: 0.5, dy: -0.25 });
    let r = c.rotation();
    assert_eq!(r.target_y, 1.5);
    assert_eq!(r.target_x, -0.25);
}

#[test]
fn damping_moves_a_fixed_fraction_per_tick() {
    let mut c = controller();
    c.set_auto_rotate(false);
    c.apply(GestureEvent::RotateDelta { dx: 1.0, dy: 0.0 });
    c.advance();
    let r = c.rotation();
    assert_eq!(r.current_y, 0.1); // one tick covers 10% of the gap
    c.advance();
    let r = c.rotation();
    assert!((r.current_y - 0.19).abs() < 1e-6);
}

#[test]
fn damped_approach_never_overshoots() {
    let mut c = controller();
    c.set_auto_rotate(false);
    c.apply(GestureEvent::RotateDelta { dx: 1.0, dy: 0.0 });
    let mut previous = 0.0f32;
    for _ in 0..200 {
        c.advance();
        let y = c.rotation().current_y;
        assert!(y >= previous);
        assert!(y <= 1.0);
        previous = y;
    }
    // Converged to within a hair of the target and stays there.
    assert!((previous - 1.0).abs() < 1e-3);
}

#[test]
fn zoom_distance_stays_clamped() {
    let mut c = controller();
    for _ in 0..100 {
        c.apply(GestureEvent::ZoomScale { factor: 1.1 });
        assert!(c.zoom_distance() <= MAX_ZOOM_DISTANCE);
    }
    assert_eq!(c.zoom_distance(), MAX_ZOOM_DISTANCE);

    for _ in 0..200 {
        c.apply(GestureEvent::ZoomScale { factor: 0.9 });
        assert!(c.zoom_distance() >= MIN_ZOOM_DISTANCE);
    }
    assert_eq!(c.zoom_distance(), MIN_ZOOM_DISTANCE);
}

#[test]
fn zoom_does_not_touch_rotation() {
    let mut c = controller();
    c.set_auto_rotate(false);
    c.apply(GestureEvent::ZoomScale { factor: 0.9 });
    assert_eq!(c.rotation(), RotationState::default());
}

#[test]
fn reset_is_instantaneous_and_idempotent() {
    let mut c = controller();
    c.apply(GestureEvent::RotateDelta { dx: 3.0, dy: -2.0 });
    for _ in 0..10 {
        c.advance();
    }
    assert_ne!(c.rotation(), RotationState::default());

    c.apply(GestureEvent::DoubleTap);
    assert_eq!(c.rotation(), RotationState::default());

    // A second reset from rest changes nothing.
    c.reset_rotation();
    assert_eq!(c.rotation(), RotationState::default());

    // With the autopilot off, rest is stable after the reset.
    c.set_auto_rotate(false);
    c.advance();
    assert_eq!(c.rotation(), RotationState::default());
}

#[test]
fn reset_leaves_zoom_alone() {
    let mut c = controller();
    c.apply(GestureEvent::ZoomScale { factor: 1.1 });
    let zoomed = c.zoom_distance();
    c.apply(GestureEvent::DoubleTap);
    assert_eq!(c.zoom_distance(), zoomed);
}

#[test]
fn autopilot_rates_scale_with_speed() {
    let mut c = controller();
    c.set_auto_rotate_speed(2.0);
    c.advance();
    let r = c.rotation();
    assert!((r.target_y - 0.01).abs() < 1e-7); // 0.005 * 2.0
    assert!((r.target_x - 0.004).abs() < 1e-7); // 0.002 * 2.0
    assert!((r.current_y - 0.001).abs() < 1e-7);
}

#[test]
fn negative_speed_is_clamped_to_zero() {
    let mut c = controller();
    c.set_auto_rotate_speed(-3.0);
    assert_eq!(c.auto_rotate().speed, 0.0);
    c.advance();
    assert_eq!(c.rotation().target_y, 0.0);
}

#[test]
fn manual_rotation_disables_autopilot_and_notifies_once() {
    let ui = RecordingUi::default();
    let disabled = ui.disabled.clone();
    let mut c = OrientationController::new(ui);
    assert!(c.auto_rotate().enabled);

    c.apply(GestureEvent::ManualRotationStarted);
    assert!(!c.auto_rotate().enabled);
    assert_eq!(disabled.get(), 1);

    // Already disabled: no duplicate notification.
    c.apply(GestureEvent::ManualRotationStarted);
    assert_eq!(disabled.get(), 1);

    // Re-enabling via the toggle arms the notification again.
    c.set_auto_rotate(true);
    c.apply(GestureEvent::ManualRotationStarted);
    assert_eq!(disabled.get(), 2);
}

#[test]
fn drag_boundaries_do_not_mutate_state() {
    let mut c = controller();
    c.set_auto_rotate(false);
    c.apply(GestureEvent::DragStart);
    c.apply(GestureEvent::DragEnd);
    assert_eq!(c.rotation(), RotationState::default());
    assert_eq!(c.zoom_distance(), DEFAULT_ZOOM_DISTANCE);
    assert!(!c.auto_rotate().enabled);
}

#[test]
fn present_pushes_current_orientation_and_zoom() {
    let mut c = controller();
    c.set_auto_rotate(false);
    c.apply(GestureEvent::RotateDelta { dx: 1.0, dy: 0.5 });
    c.apply(GestureEvent::ZoomScale { factor: 0.9 });
    c.advance();

    let mut sink = RecordingRender::default();
    c.present(&mut sink);
    let r = c.rotation();
    assert_eq!(sink.orientation, (r.current_x, r.current_y));
    assert_eq!(sink.distance, c.zoom_distance());
}

// End-to-end arithmetic: a 100 px horizontal mouse drag becomes one radian
// of yaw target, and the first tick presents a tenth of it.
#[test]
fn drag_pipeline_from_pixels_to_presented_angle() {
    let mut tracker = GestureInputTracker::new();
    let mut c = controller();
    c.set_auto_rotate(false);

    for ev in tracker.on_pointer_down(0.0, 0.0) {
        c.apply(ev);
    }
    for ev in tracker.on_pointer_move(100.0, 0.0) {
        c.apply(ev);
    }
    for ev in tracker.on_pointer_up() {
        c.apply(ev);
    }

    assert!(!c.auto_rotate().enabled); // the move disabled the autopilot
    let r = c.rotation();
    assert!((r.target_y - 1.0).abs() < 1e-6);

    c.advance();
    assert!((c.rotation().current_y - 0.1).abs() < 1e-6);
}
