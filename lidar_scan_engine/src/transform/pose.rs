/// Pose — unified model/camera state for one rendered frame.
///
/// Two calling conventions feed the render driver: Euler triples from the
/// interactive path, and quaternion attitude state from the physics path.
/// Both are adapted into this single representation, so model, view, and
/// model-view matrices are composed in exactly one place.
///
/// All angles are radians. Double precision throughout; conversion to f32
/// happens once, at uniform upload.

use glam::{DMat4, DQuat, DVec3};

/// Quaternion from Z·Y·X Euler angles (radians, X innermost).
///
/// Matches the matrix composition Rz · Ry · Rx used by both the model and
/// the camera rotation.
pub fn euler_zyx(angles: DVec3) -> DQuat {
    DQuat::from_rotation_z(angles.z)
        * DQuat::from_rotation_y(angles.y)
        * DQuat::from_rotation_x(angles.x)
}

/// Euler-convention frame input: model rotation, camera position, and
/// camera rotation, all as X/Y/Z triples (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerPose {
    /// Model rotation about X, Y, Z (radians)
    pub model_rotation: DVec3,
    /// Camera position in world coordinates
    pub camera_position: DVec3,
    /// Camera rotation about X, Y, Z (radians)
    pub camera_rotation: DVec3,
}

/// Physics-convention frame input, as produced by an attitude integrator.
///
/// The translation is the view translation itself (applied before the
/// camera orientation), not a camera position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsPose {
    /// Model attitude quaternion
    pub model_orientation: DQuat,
    /// View translation vector
    pub translation: DVec3,
    /// Camera attitude quaternion
    pub camera_orientation: DQuat,
}

/// Unified pose: model and camera orientations plus the view translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Model orientation
    pub model: DQuat,
    /// Camera orientation
    pub camera: DQuat,
    /// View translation (negated camera position)
    pub translation: DVec3,
}

impl Pose {
    /// Adapt an Euler frame description.
    ///
    /// The camera position is negated here: the view matrix translates the
    /// world by the opposite of where the camera sits.
    pub fn from_euler(pose: &EulerPose) -> Self {
        Self {
            model: euler_zyx(pose.model_rotation),
            camera: euler_zyx(pose.camera_rotation),
            translation: -pose.camera_position,
        }
    }

    /// Adapt a physics frame description. Fields carry over as-is.
    pub fn from_physics(pose: &PhysicsPose) -> Self {
        Self {
            model: pose.model_orientation,
            camera: pose.camera_orientation,
            translation: pose.translation,
        }
    }

    /// Model matrix: orientation then uniform scale.
    pub fn model_matrix(&self, scale: f64) -> DMat4 {
        DMat4::from_quat(self.model) * DMat4::from_scale(DVec3::splat(scale))
    }

    /// Analytic inverse of the model matrix: inverse scale then inverse
    /// orientation. Never computed by numeric inversion.
    pub fn inverse_model_matrix(&self, scale: f64) -> DMat4 {
        DMat4::from_scale(DVec3::splat(1.0 / scale)) * DMat4::from_quat(self.model.inverse())
    }

    /// View matrix: camera orientation composed with the view translation.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::from_quat(self.camera) * DMat4::from_translation(self.translation)
    }

    /// Model-view matrix: view × model.
    pub fn model_view_matrix(&self, scale: f64) -> DMat4 {
        self.view_matrix() * self.model_matrix(scale)
    }

    /// Camera position expressed in model coordinates.
    ///
    /// Equals inverse-model × inverse-view × origin, computed without
    /// materializing either matrix.
    pub fn camera_position_in_model(&self, scale: f64) -> DVec3 {
        self.model.inverse() * (-self.translation) / scale
    }
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
