/// Clip planes - near/far pair tracking the scanned target
///
/// The target is staged inside a 200-unit cube, so construction seeds
/// conservative planes that bracket the whole cube from the camera's
/// distance. Each rendered frame then replaces them with a tight pair
/// estimated from the mesh's extent in camera space, keeping the depth
/// buffer's precision concentrated on the target.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::graphics_device::TargetMesh;
use crate::{scan_debug, scan_error};

/// Half diagonal of the staging cube (200^3, so 100 * sqrt(3) rounded up)
pub const BOX_HALF_DIAGONAL: f32 = 174.0;

/// Margin pulling the estimated near plane toward the camera
pub const NEAR_PLANE_FACTOR: f32 = 0.99;

/// Margin pushing the estimated far plane away from the camera
pub const FAR_PLANE_FACTOR: f32 = 1.01;

/// Floor for the near plane; the projection needs near > 0
pub const MIN_NEAR_PLANE: f32 = 0.01;

const LOG_SOURCE: &str = "lidarscan::ClipPlanes";

/// Near/far planes plus the raw near bound they were derived from.
///
/// `near_bound` carries no margin or floor; the depth-to-distance
/// mapping in the shaders is calibrated against the raw bound, so it is
/// uploaded alongside the adjusted planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlanes {
    /// Raw distance to the nearest point, before margin and floor
    pub near_bound: f32,

    /// Near plane with margin and floor applied
    pub near: f32,

    /// Far plane with margin applied
    pub far: f32,
}

impl ClipPlanes {
    /// Conservative planes bracketing the staging cube.
    ///
    /// Used from construction until the first frame estimate replaces
    /// them. Only `near` gets the positivity floor; `near_bound` keeps
    /// the raw (possibly negative) distance.
    pub fn seed(camera_distance: f32) -> Self {
        ClipPlanes {
            near_bound: camera_distance - BOX_HALF_DIAGONAL,
            near: MIN_NEAR_PLANE.max(camera_distance - BOX_HALF_DIAGONAL),
            far: camera_distance + BOX_HALF_DIAGONAL,
        }
    }

    /// Tight planes from the mesh's bounds in camera space.
    ///
    /// # Arguments
    ///
    /// * `mesh` - The scanned target
    /// * `model` - Current model matrix (rotation and scale applied)
    /// * `camera_position` - Camera position in model coordinates
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateClipPlanes` when the margins produce an
    /// inverted volume (far <= near). The frame must not be rendered
    /// with such planes; the caller keeps the previous pair and skips.
    pub fn estimate(mesh: &dyn TargetMesh, model: &Mat4, camera_position: Vec3) -> Result<Self> {
        let near_bound = mesh.near_plane_bound(model, camera_position);
        let far_bound = mesh.far_plane_bound(model, camera_position);

        let near = (near_bound * NEAR_PLANE_FACTOR).max(MIN_NEAR_PLANE);
        let far = far_bound * FAR_PLANE_FACTOR;

        if far <= near {
            scan_error!(
                LOG_SOURCE,
                "Degenerate clip planes: near = {}, far = {}",
                near,
                far
            );
            return Err(Error::DegenerateClipPlanes { near, far });
        }

        scan_debug!(
            LOG_SOURCE,
            "Estimated clip planes: near = {}, far = {}",
            near,
            far
        );

        Ok(ClipPlanes {
            near_bound,
            near,
            far,
        })
    }
}

#[cfg(test)]
#[path = "clip_planes_tests.rs"]
mod tests;
