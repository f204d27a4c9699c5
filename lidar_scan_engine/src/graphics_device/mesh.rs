/// TargetMesh trait - the scanned object as seen by the engine
///
/// Mesh loading, recentering, and bounding-volume computation happen before
/// Scene construction; the Scene receives the loaded mesh by value and owns
/// it exclusively. The engine only needs modeled extents, per-frame clip
/// bounds, and a delegate for the draw call.

use glam::{Mat4, Vec3};
use crate::error::Result;
use super::shader::ShaderProgram;

/// A loaded, recentered target mesh.
pub trait TargetMesh {
    /// Modeled bounding-box extents (model units, before scaling)
    fn dimensions(&self) -> Vec3;

    /// Modeled centroid (model units, before scaling)
    fn centroid(&self) -> Vec3;

    /// Distance from the camera to the nearest point of the mesh.
    ///
    /// # Arguments
    ///
    /// * `model` - Current model matrix (rotation and scale applied)
    /// * `camera_position` - Camera position in model coordinates
    fn near_plane_bound(&self, model: &Mat4, camera_position: Vec3) -> f32;

    /// Distance from the camera to the farthest point of the mesh.
    ///
    /// # Arguments
    ///
    /// * `model` - Current model matrix (rotation and scale applied)
    /// * `camera_position` - Camera position in model coordinates
    fn far_plane_bound(&self, model: &Mat4, camera_position: Vec3) -> f32;

    /// Issue the draw call through the bound shader program
    fn render(&self, shader: &dyn ShaderProgram) -> Result<()>;
}
