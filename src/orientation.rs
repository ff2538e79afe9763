use crate::gesture::GestureEvent;

// Motion tuning. The autopilot advances yaw faster than pitch, which gives
// the idle cube a tumbling rather than pure-spin look.
pub const MIN_ZOOM_DISTANCE: f32 = 2.0;
pub const MAX_ZOOM_DISTANCE: f32 = 10.0;
pub const DEFAULT_ZOOM_DISTANCE: f32 = 5.0;
pub const ROTATION_DAMPING: f32 = 0.1; // fraction of remaining distance per tick
pub const AUTO_YAW_RATE: f32 = 0.005; // rad per tick at speed 1.0
pub const AUTO_PITCH_RATE: f32 = 0.002; // rad per tick at speed 1.0

/// Consumes the presented orientation once per tick, after [`advance`].
///
/// [`advance`]: OrientationController::advance
pub trait RenderSink {
    fn apply_orientation(&mut self, rotation_x: f32, rotation_y: f32);
    fn apply_zoom(&mut self, distance: f32);
}

/// Receives outbound notifications the hosting UI must reflect.
pub trait UiSink {
    /// The first manual rotation of a session switched the autopilot off;
    /// whatever toggle control exists should be unchecked.
    fn notify_auto_rotate_disabled(&mut self);
}

/// Target angles accumulate without bound (no 2π wrapping); current angles
/// trail them through damped interpolation and only meet them at rest.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub target_x: f32,
    pub target_y: f32,
    pub current_x: f32,
    pub current_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoRotateConfig {
    pub enabled: bool,
    pub speed: f32,
}

impl Default for AutoRotateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 1.0,
        }
    }
}

/// Sole owner of rotation and zoom state.
///
/// Gesture messages and the autopilot both feed the *target* rotation;
/// `advance()` moves the presented *current* rotation a fixed fraction of
/// the way there each tick. The zoom distance is re-clamped immediately
/// after every mutation. Nothing else in the program writes this state.
pub struct OrientationController<U: UiSink> {
    rotation: RotationState,
    distance: f32,
    auto_rotate: AutoRotateConfig,
    ui: U,
}

impl<U: UiSink> OrientationController<U> {
    pub fn new(ui: U) -> Self {
        Self {
            rotation: RotationState::default(),
            distance: DEFAULT_ZOOM_DISTANCE,
            auto_rotate: AutoRotateConfig::default(),
            ui,
        }
    }

    /// Single entry point for classified gesture messages, applied
    /// synchronously as they arrive (never queued across ticks).
    pub fn apply(&mut self, ev: GestureEvent) {
        match ev {
            GestureEvent::RotateDelta { dx, dy } => self.on_rotate_delta(dx, dy),
            GestureEvent::ZoomScale { factor } => self.on_zoom_scale(factor),
            GestureEvent::ManualRotationStarted => self.on_manual_rotation_started(),
            GestureEvent::DoubleTap => self.on_double_tap(),
            GestureEvent::DragStart | GestureEvent::DragEnd => {}
        }
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate.enabled = enabled;
    }

    pub fn set_auto_rotate_speed(&mut self, speed: f32) {
        self.auto_rotate.speed = speed.max(0.0);
    }

    pub fn on_manual_rotation_started(&mut self) {
        if self.auto_rotate.enabled {
            self.auto_rotate.enabled = false;
            self.ui.notify_auto_rotate_disabled();
        }
    }

    /// Horizontal screen motion drives yaw (Y), vertical drives pitch (X).
    pub fn on_rotate_delta(&mut self, dx: f32, dy: f32) {
        self.rotation.target_y += dx;
        self.rotation.target_x += dy;
    }

    pub fn on_zoom_scale(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_ZOOM_DISTANCE, MAX_ZOOM_DISTANCE);
    }

    pub fn on_double_tap(&mut self) {
        self.reset_rotation();
    }

    /// Zeroes target and current rotation in one step. This is the only
    /// mutation that bypasses the damped interpolation: a reset must be
    /// instantaneous, not a slow drift back.
    pub fn reset_rotation(&mut self) {
        self.rotation = RotationState::default();
    }

    /// Advances state one tick: autopilot drift first (if enabled), then
    /// exponential smoothing of current toward target.
    pub fn advance(&mut self) {
        if self.auto_rotate.enabled {
            self.rotation.target_y += AUTO_YAW_RATE * self.auto_rotate.speed;
            self.rotation.target_x += AUTO_PITCH_RATE * self.auto_rotate.speed;
        }
        self.rotation.current_x +=
            (self.rotation.target_x - self.rotation.current_x) * ROTATION_DAMPING;
        self.rotation.current_y +=
            (self.rotation.target_y - self.rotation.current_y) * ROTATION_DAMPING;
    }

    /// Pushes the presented orientation and zoom to the rendering
    /// collaborator. Called once per tick after `advance()`.
    pub fn present<R: RenderSink>(&self, sink: &mut R) {
        sink.apply_orientation(self.rotation.current_x, self.rotation.current_y);
        sink.apply_zoom(self.distance);
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn zoom_distance(&self) -> f32 {
        self.distance
    }

    pub fn auto_rotate(&self) -> AutoRotateConfig {
        self.auto_rotate
    }
}
