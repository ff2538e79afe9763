/// Scene and UI tuning constants for the cube viewer.
///
/// These constants express intended appearance and keep magic numbers out
/// of the code. Interaction thresholds live next to the pure modules that
/// own them (`gesture.rs`, `orientation.rs`); everything here is
/// presentation.
use std::f32::consts::PI;

// Camera
pub const CAMERA_FOV_Y_RAD: f32 = 75.0 * PI / 180.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Cube geometry (a 2x2x2 box)
pub const CUBE_HALF_EXTENT: f32 = 1.0;
pub const FACE_COUNT: usize = 6;
pub const CUBE_TRIANGLE_COUNT: u32 = 12;

// Face order used everywhere a face index appears (buttons, file inputs,
// status labels, GPU bind groups).
pub const FACE_NAMES: [&str; FACE_COUNT] = ["Back", "Front", "Left", "Right", "Bottom", "Top"];

// Default colors for faces without textures
pub const DEFAULT_FACE_COLORS: [[f32; 3]; FACE_COUNT] = [
    [1.0, 0.42, 0.42],     // Back - red
    [0.318, 0.812, 0.4],   // Front - green
    [0.2, 0.604, 0.941],   // Left - blue
    [1.0, 0.831, 0.231],   // Right - yellow
    [0.969, 0.514, 0.675], // Bottom - pink
    [0.306, 0.804, 0.769], // Top - cyan
];

// Hex forms of the palette, for the SVG preview placeholders.
pub const DEFAULT_FACE_COLORS_HEX: [&str; FACE_COUNT] =
    ["ff6b6b", "51cf66", "339af0", "ffd43b", "f783ac", "4ecdc4"];

// Lighting: one directional light plus an ambient floor.
pub const LIGHT_DIRECTION: [f32; 3] = [5.0, 5.0, 5.0]; // normalized in shader
pub const AMBIENT_INTENSITY: f32 = 0.35;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;

// Background clear color
pub const CLEAR_COLOR: [f64; 3] = [0.102, 0.102, 0.18];

// UI
pub const TOAST_DURATION_MS: i32 = 2000;
pub const STATS_INTERVAL_SEC: f32 = 1.0;
