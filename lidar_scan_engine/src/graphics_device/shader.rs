/// ShaderProgram trait - opaque handle to a bound GPU program
///
/// The engine uploads uniforms by name through this capability and never
/// resolves uniform locations itself. Uniform names used by the render
/// driver ("ModelViewMatrix", "near_plane", ...) are part of the wire
/// contract with the external depth-encoding shader.

use glam::{Mat3, Mat4};
use crate::error::Result;

/// Opaque shader program handle with name-based uniform binding.
///
/// `&self` throughout: binding and uniform upload mutate GPU state,
/// not the handle.
pub trait ShaderProgram {
    /// Program identifier (GL program object name or equivalent)
    fn id(&self) -> u32;

    /// Make this program the active one
    fn bind(&self) -> Result<()>;

    /// Upload a scalar float uniform
    fn set_scalar(&self, name: &str, value: f32) -> Result<()>;

    /// Upload a 3x3 matrix uniform (column-major)
    fn set_mat3(&self, name: &str, value: &Mat3) -> Result<()>;

    /// Upload a 4x4 matrix uniform (column-major)
    fn set_mat4(&self, name: &str, value: &Mat4) -> Result<()>;
}
