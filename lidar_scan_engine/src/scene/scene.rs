/// Scene - render driver for one scanned target
///
/// Owns the loaded mesh and the most recent clip/projection state.
/// Every render call re-estimates the clip planes from the current
/// pose, rebuilds the projection, uploads the uniform set consumed by
/// the depth-encoding shader, and delegates the draw call to the mesh.
/// Point-cloud extraction reads the frame those same matrices rendered.

use std::path::Path;

use glam::{DMat4, DVec3, Mat4};

use crate::error::Result;
use crate::graphics_device::{ClearFlags, GraphicsDevice, LightParams, ShaderProgram, TargetMesh};
use crate::pointcloud::{pcd, reconstruct, PointSample};
use crate::transform::{model_to_camera_matrix, normal_matrix, perspective_matrix, Pose};
use crate::{scan_info, scan_trace, scan_warn};

use super::clip_planes::ClipPlanes;
use super::metadata::append_extension;

/// Projection aspect ratio; scan frames are square.
pub const ASPECT_RATIO: f64 = 1.0;

const LOG_SOURCE: &str = "lidarscan::Scene";

/// Render driver for one scanned target.
///
/// Exclusive device access is part of the contract: `render` and
/// `extract_point_cloud` take `&mut self` plus `&mut dyn
/// GraphicsDevice`, so two frames cannot be in flight against the same
/// context.
pub struct Scene {
    mesh: Box<dyn TargetMesh>,
    scale_factor: f64,
    camera_distance: f32,

    /// Most recent estimate; seeded at construction, replaced per frame
    clip: ClipPlanes,

    /// Projection matching `clip`, rebuilt each rendered frame
    projection: DMat4,

    /// Reusable framebuffer readback storage
    readback: Vec<u8>,
}

impl Scene {
    /// Create a scene around a loaded, re-centered target mesh.
    ///
    /// Clip planes start out bracketing the staging cube; the first
    /// render replaces them with a per-pose estimate.
    pub fn new(mesh: Box<dyn TargetMesh>, scale_factor: f64, camera_distance: f32) -> Self {
        let dimensions = mesh.dimensions();
        scan_info!(
            LOG_SOURCE,
            "Object dimensions as modeled: {}\t{}\t{}",
            dimensions.x,
            dimensions.y,
            dimensions.z
        );
        let centroid = mesh.centroid();
        scan_info!(
            LOG_SOURCE,
            "Center of object as modeled: {}\t{}\t{}",
            centroid.x,
            centroid.y,
            centroid.z
        );
        scan_info!(LOG_SOURCE, "Object will be re-centered prior to rendering");

        Scene {
            mesh,
            scale_factor,
            camera_distance,
            clip: ClipPlanes::seed(camera_distance),
            projection: DMat4::IDENTITY,
            readback: Vec::new(),
        }
    }

    /// Near plane from the most recent estimation (margined and floored)
    pub fn near_plane(&self) -> f32 {
        self.clip.near
    }

    /// Far plane from the most recent estimation (margined)
    pub fn far_plane(&self) -> f32 {
        self.clip.far
    }

    /// Raw near bound from the most recent estimation
    pub fn near_plane_bound(&self) -> f32 {
        self.clip.near_bound
    }

    /// Render one frame of the target under the given pose.
    ///
    /// Step order is a hard requirement: clip planes and projection are
    /// recomputed before any device state changes, so a degenerate
    /// estimate aborts the frame with the device untouched and the
    /// previous clip/projection still stored.
    ///
    /// A device error reported after the draw is logged and does not
    /// fail the frame.
    pub fn render(
        &mut self,
        device: &mut dyn GraphicsDevice,
        shader: &dyn ShaderProgram,
        fov_deg: f32,
        pose: &Pose,
    ) -> Result<()> {
        let model = pose.model_matrix(self.scale_factor);
        let camera_position = pose.camera_position_in_model(self.scale_factor);

        let clip = ClipPlanes::estimate(
            self.mesh.as_ref(),
            &model.as_mat4(),
            camera_position.as_vec3(),
        )?;
        self.clip = clip;
        self.projection = perspective_matrix(
            (fov_deg as f64).to_radians(),
            ASPECT_RATIO,
            clip.near as f64,
            clip.far as f64,
        );

        device.clear(ClearFlags::COLOR | ClearFlags::DEPTH)?;
        shader.bind()?;

        // Lighting is pose-independent: headlight at the camera origin.
        device.set_light(&LightParams::default())?;
        shader.set_mat4("LightModelViewMatrix", &Mat4::IDENTITY)?;

        shader.set_scalar("far_plane", clip.far)?;
        shader.set_scalar("near_plane", clip.near)?;

        let view = pose.view_matrix();
        let model_view = view * model;
        scan_trace!(LOG_SOURCE, "Model: {}", model);
        scan_trace!(LOG_SOURCE, "View: {}", view);
        scan_trace!(LOG_SOURCE, "Model view: {}", model_view);

        shader.set_mat4("ViewMatrix", &view.as_mat4())?;
        shader.set_mat4("ModelViewMatrix", &model_view.as_mat4())?;
        shader.set_mat3("NormalMatrix", &normal_matrix(&model_view).as_mat3())?;
        shader.set_mat4(
            "ModelViewProjectionMatrix",
            &(self.projection * model_view).as_mat4(),
        )?;

        self.mesh.render(shader)?;

        if let Some(message) = device.poll_error() {
            scan_warn!(LOG_SOURCE, "Graphics error after draw: {}", message);
        }
        device.flush()?;

        Ok(())
    }

    /// Reconstruct camera-space samples from the just-rendered frame.
    ///
    /// Requires a prior `render` with the same pose; the stored clip
    /// planes and projection from that call are reused here.
    pub fn extract_point_cloud(
        &mut self,
        device: &mut dyn GraphicsDevice,
        pose: &Pose,
        width: u32,
        height: u32,
    ) -> Result<Vec<PointSample>> {
        let model_view = pose.model_view_matrix(self.scale_factor);
        let viewport = device.viewport();

        self.readback.resize((width * height * 4) as usize, 0);
        device.read_pixels(width, height, &mut self.readback)?;

        Ok(reconstruct(
            &self.readback,
            width,
            height,
            &model_view,
            &self.projection,
            &viewport,
            &self.clip,
        ))
    }

    /// Extract the just-rendered frame and write it as `<basename>.pcd`.
    pub fn save_point_cloud<P: AsRef<Path>>(
        &mut self,
        device: &mut dyn GraphicsDevice,
        pose: &Pose,
        basename: P,
        width: u32,
        height: u32,
    ) -> Result<()> {
        let path = append_extension(basename.as_ref(), ".pcd");
        scan_info!(LOG_SOURCE, "Saving point cloud to {}", path.display());

        let points = self.extract_point_cloud(device, pose, width, height)?;
        pcd::write(&path, &points)
    }

    /// Composite model-to-camera matrix for the fixed-axis scan
    /// convention: camera at `camera_distance` along +Z, turned to face
    /// the model. Rotations in radians.
    pub fn pose_matrix(&self, model_rotation: DVec3, camera_rotation: DVec3) -> DMat4 {
        model_to_camera_matrix(model_rotation, camera_rotation, self.camera_distance as f64)
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
