use smallvec::SmallVec;

// Interaction thresholds. Touch uses a higher rotate sensitivity than the
// mouse to compensate for coarser pointer precision; wheel ticks use a
// larger zoom step than pinch moves because they arrive less often.
pub const MOUSE_ROTATE_SENSITIVITY: f32 = 0.01; // rad per px
pub const TOUCH_ROTATE_SENSITIVITY: f32 = 0.015; // rad per px
pub const WHEEL_ZOOM_OUT_FACTOR: f32 = 1.1;
pub const WHEEL_ZOOM_IN_FACTOR: f32 = 0.9;
pub const PINCH_ZOOM_IN_FACTOR: f32 = 0.95; // fingers spreading
pub const PINCH_ZOOM_OUT_FACTOR: f32 = 1.05; // fingers closing
pub const TAP_MAX_DURATION_MS: f64 = 300.0;
pub const DOUBLE_TAP_GAP_MS: f64 = 400.0;

/// Motion intents produced by classifying raw pointer/touch/wheel input.
///
/// `RotateDelta` carries radians (sensitivity already applied), so the
/// consumer accumulates the values verbatim. `ManualRotationStarted` fires
/// exactly once per gesture session, on the first move after a press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    DragStart,
    DragEnd,
    RotateDelta { dx: f32, dy: f32 },
    ZoomScale { factor: f32 },
    ManualRotationStarted,
    DoubleTap,
}

/// A single active touch point in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

pub type GestureEvents = SmallVec<[GestureEvent; 2]>;

// Per gesture session state: one continuous press through its release.
// `pointer_count` disambiguates rotate (1) from pinch (2); the two modes
// are mutually exclusive.
#[derive(Clone, Copy, Default)]
struct GestureSession {
    active: bool,
    last_x: f32,
    last_y: f32,
    pointer_count: u32,
    last_pinch_distance: Option<f32>,
    rotation_announced: bool,
}

/// Classifies raw input events into [`GestureEvent`]s.
///
/// The tracker never mutates rotation or zoom state itself; it only emits
/// read-only delta messages. Timestamps are injected by the caller
/// (`now_ms`, any monotonic millisecond clock) so the timing-based
/// double-tap detection stays deterministic under test.
pub struct GestureInputTracker {
    session: GestureSession,
    // Double-tap bookkeeping lives outside the session on purpose: an
    // intervening pinch resets the pointer count but must not erase it.
    touch_started_ms: f64,
    last_quick_release_ms: Option<f64>,
}

impl Default for GestureInputTracker {
    fn default() -> Self {
        Self {
            session: GestureSession::default(),
            touch_started_ms: f64::NEG_INFINITY,
            last_quick_release_ms: None,
        }
    }
}

impl GestureInputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> GestureEvents {
        self.begin_rotate_session(x, y);
        let mut out = GestureEvents::new();
        out.push(GestureEvent::DragStart);
        out
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> GestureEvents {
        self.rotate_move(x, y, MOUSE_ROTATE_SENSITIVITY)
    }

    pub fn on_pointer_up(&mut self) -> GestureEvents {
        self.end_session()
    }

    /// A pointer leaving the surface without a matching up event would
    /// otherwise leave the session stuck in dragging state.
    pub fn on_pointer_leave(&mut self) -> GestureEvents {
        self.end_session()
    }

    pub fn on_wheel(&mut self, delta_y: f32) -> GestureEvents {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT_FACTOR
        } else {
            WHEEL_ZOOM_IN_FACTOR
        };
        let mut out = GestureEvents::new();
        out.push(GestureEvent::ZoomScale { factor });
        out
    }

    pub fn on_touch_start(&mut self, touches: &[TouchPoint], now_ms: f64) -> GestureEvents {
        let mut out = GestureEvents::new();
        match touches {
            [t] => {
                self.begin_rotate_session(t.x, t.y);
                self.touch_started_ms = now_ms;
                out.push(GestureEvent::DragStart);
            }
            [a, b] => {
                // Switch to pinch mode; rotation is suppressed while two
                // touches are present.
                self.session.active = true;
                self.session.pointer_count = 2;
                self.session.last_pinch_distance = Some(touch_distance(a, b));
            }
            // Empty or >2-touch lists are dropped.
            _ => {}
        }
        out
    }

    pub fn on_touch_move(&mut self, touches: &[TouchPoint]) -> GestureEvents {
        match touches {
            [t] => self.rotate_move(t.x, t.y, TOUCH_ROTATE_SENSITIVITY),
            [a, b] if self.session.pointer_count == 2 => {
                let mut out = GestureEvents::new();
                let d1 = touch_distance(a, b);
                if let Some(d0) = self.session.last_pinch_distance {
                    // A zero baseline would divide by zero; skip emission
                    // until a usable distance has been recorded.
                    if d0 > 0.0 {
                        let factor = if d1 / d0 > 1.0 {
                            PINCH_ZOOM_IN_FACTOR
                        } else {
                            PINCH_ZOOM_OUT_FACTOR
                        };
                        out.push(GestureEvent::ZoomScale { factor });
                    }
                }
                self.session.last_pinch_distance = Some(d1);
                out
            }
            _ => GestureEvents::new(),
        }
    }

    /// `remaining` is the list of touches still on the surface after this
    /// event; `changed_count` is how many touches were lifted.
    pub fn on_touch_end(
        &mut self,
        remaining: &[TouchPoint],
        changed_count: usize,
        now_ms: f64,
    ) -> GestureEvents {
        let mut out = GestureEvents::new();

        let mut double_tap = false;
        if changed_count == 1 && now_ms - self.touch_started_ms < TAP_MAX_DURATION_MS {
            if let Some(prev) = self.last_quick_release_ms {
                if now_ms - prev < DOUBLE_TAP_GAP_MS {
                    out.push(GestureEvent::DoubleTap);
                    double_tap = true;
                }
            }
            self.last_quick_release_ms = Some(now_ms);
        }

        match remaining {
            [t] => {
                // Back from pinch to a single finger: re-anchor the rotate
                // reference at the surviving touch so the next move does
                // not register a spurious jump.
                self.session.pointer_count = 1;
                self.session.last_x = t.x;
                self.session.last_y = t.y;
                self.session.last_pinch_distance = None;
            }
            [] => {
                let was_active = self.session.active;
                self.session = GestureSession::default();
                if was_active && !double_tap {
                    out.push(GestureEvent::DragEnd);
                }
            }
            _ => {}
        }
        out
    }

    fn begin_rotate_session(&mut self, x: f32, y: f32) {
        self.session = GestureSession {
            active: true,
            last_x: x,
            last_y: y,
            pointer_count: 1,
            last_pinch_distance: None,
            rotation_announced: false,
        };
    }

    fn rotate_move(&mut self, x: f32, y: f32, sensitivity: f32) -> GestureEvents {
        let mut out = GestureEvents::new();
        if !self.session.active || self.session.pointer_count != 1 {
            return out;
        }
        if !self.session.rotation_announced {
            self.session.rotation_announced = true;
            out.push(GestureEvent::ManualRotationStarted);
        }
        out.push(GestureEvent::RotateDelta {
            dx: (x - self.session.last_x) * sensitivity,
            dy: (y - self.session.last_y) * sensitivity,
        });
        self.session.last_x = x;
        self.session.last_y = y;
        out
    }

    fn end_session(&mut self) -> GestureEvents {
        let mut out = GestureEvents::new();
        if self.session.active {
            out.push(GestureEvent::DragEnd);
        }
        self.session = GestureSession::default();
        out
    }
}

#[inline]
fn touch_distance(a: &TouchPoint, b: &TouchPoint) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
