//! Graphics device module — collaborator traits for the render driver.
//!
//! The engine computes transforms and drives the frame; everything that
//! touches the GPU goes through these traits. The embedding application
//! implements them on top of its context/shader/mesh layer.

mod graphics_device;
mod shader;
mod mesh;

pub use graphics_device::{GraphicsDevice, ClearFlags, LightParams, Viewport};
pub use shader::ShaderProgram;
pub use mesh::TargetMesh;

// Mock graphics collaborators for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
