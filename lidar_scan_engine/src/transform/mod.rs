//! Transform module — pose adapters and matrix builders.
//!
//! Two calling conventions (Euler triples and quaternion physics state)
//! collapse into one `Pose`, and every matrix is a pure function of that
//! pose plus the scene's scale factor. No hidden state.

mod pose;
mod matrices;

pub use pose::{euler_zyx, EulerPose, PhysicsPose, Pose};
pub use matrices::{
    model_to_camera_matrix, normal_matrix, perspective_matrix, unproject, viewport_to_ndc,
};
