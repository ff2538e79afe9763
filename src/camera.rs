use crate::constants::{CAMERA_FAR, CAMERA_FOV_Y_RAD, CAMERA_NEAR};
use glam::{Mat4, Vec3};

/// Combined view-projection matrix for the fixed look-at camera.
///
/// The eye sits on +Z at `distance` from the origin (the controller's zoom
/// state); width/height come from the canvas backing store.
#[inline]
pub fn view_proj(width: u32, height: u32, distance: f32) -> Mat4 {
    let aspect = width as f32 / height.max(1) as f32;
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y_RAD, aspect, CAMERA_NEAR, CAMERA_FAR);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, distance), Vec3::ZERO, Vec3::Y);
    proj * view
}

/// Cube model matrix from the presented pitch/yaw pair.
#[inline]
pub fn model_matrix(rotation_x: f32, rotation_y: f32) -> Mat4 {
    Mat4::from_rotation_x(rotation_x) * Mat4::from_rotation_y(rotation_y)
}
