/// Free matrix builders shared by the render driver and the point-cloud
/// reconstructor.
///
/// OpenGL conventions throughout: right-handed eye space looking down -Z,
/// NDC depth in [-1, 1], window depth in [0, 1], viewport origin at the
/// bottom-left.

use std::f64::consts::PI;
use glam::{DMat3, DMat4, DVec3};
use crate::graphics_device::Viewport;
use super::pose::euler_zyx;

/// Right-handed perspective projection with GL depth range.
pub fn perspective_matrix(fov_y_radians: f64, aspect_ratio: f64, near: f64, far: f64) -> DMat4 {
    DMat4::perspective_rh_gl(fov_y_radians, aspect_ratio, near, far)
}

/// Normal matrix: inverse-transpose of the model-view's upper-left 3x3.
///
/// Keeps normals perpendicular under non-uniform or scaled transforms.
pub fn normal_matrix(model_view: &DMat4) -> DMat3 {
    DMat3::from_mat4(*model_view).inverse().transpose()
}

/// Window coordinates (pixel x, pixel y, depth in [0, 1]) to normalized
/// device coordinates in [-1, 1] on all three axes.
pub fn viewport_to_ndc(win: DVec3, viewport: &Viewport) -> DVec3 {
    DVec3::new(
        2.0 * (win.x - viewport.x as f64) / viewport.width as f64 - 1.0,
        2.0 * (win.y - viewport.y as f64) / viewport.height as f64 - 1.0,
        2.0 * win.z - 1.0,
    )
}

/// Invert the full project-then-viewport transform for one window-space
/// point, back to object coordinates.
///
/// The point is treated as a position (w = 1), so projecting the result
/// forward lands it back on the same pixel and depth.
pub fn unproject(win: DVec3, model_view: &DMat4, projection: &DMat4, viewport: &Viewport) -> DVec3 {
    let inverse = (*projection * *model_view).inverse();
    inverse.project_point3(viewport_to_ndc(win, viewport))
}

/// Composite model-to-camera pose matrix for the fixed-axis convention:
/// a camera on the +Z axis at `camera_distance`, turned back toward the
/// origin, with independent camera and model Euler rotations (radians).
pub fn model_to_camera_matrix(
    model_rotation: DVec3,
    camera_rotation: DVec3,
    camera_distance: f64,
) -> DMat4 {
    DMat4::from_quat(euler_zyx(camera_rotation))
        * DMat4::from_rotation_y(PI)
        * DMat4::from_translation(DVec3::new(0.0, 0.0, -camera_distance))
        * DMat4::from_quat(euler_zyx(model_rotation))
}

#[cfg(test)]
#[path = "matrices_tests.rs"]
mod tests;
