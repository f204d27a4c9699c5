/// Mock graphics collaborators for unit tests (no GPU required)
///
/// All mocks push the operations they receive into a shared event log so
/// tests can assert the exact call order across device, shader, and mesh.

use std::sync::{Arc, Mutex};
use glam::{Mat3, Mat4, Vec3};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use super::{ClearFlags, GraphicsDevice, LightParams, ShaderProgram, TargetMesh, Viewport};

/// Uniform value captured by MockShaderProgram
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Scalar(f32),
    Mat3(Mat3),
    Mat4(Mat4),
}

// ============================================================================
// Mock ShaderProgram
// ============================================================================

/// Mock shader that records binds and captures uniforms by name
pub struct MockShaderProgram {
    pub id: u32,
    /// Shared event log (op order across all mocks)
    pub events: Arc<Mutex<Vec<String>>>,
    /// Last value uploaded per uniform name
    pub uniforms: Arc<Mutex<FxHashMap<String, UniformValue>>>,
}

impl MockShaderProgram {
    pub fn new(id: u32, events: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            id,
            events,
            uniforms: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Last captured value for a uniform name
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms.lock().unwrap().get(name).copied()
    }
}

impl ShaderProgram for MockShaderProgram {
    fn id(&self) -> u32 {
        self.id
    }

    fn bind(&self) -> Result<()> {
        self.events.lock().unwrap().push("bind".to_string());
        Ok(())
    }

    fn set_scalar(&self, name: &str, value: f32) -> Result<()> {
        self.events.lock().unwrap().push(format!("set_scalar({})", name));
        self.uniforms
            .lock()
            .unwrap()
            .insert(name.to_string(), UniformValue::Scalar(value));
        Ok(())
    }

    fn set_mat3(&self, name: &str, value: &Mat3) -> Result<()> {
        self.events.lock().unwrap().push(format!("set_mat3({})", name));
        self.uniforms
            .lock()
            .unwrap()
            .insert(name.to_string(), UniformValue::Mat3(*value));
        Ok(())
    }

    fn set_mat4(&self, name: &str, value: &Mat4) -> Result<()> {
        self.events.lock().unwrap().push(format!("set_mat4({})", name));
        self.uniforms
            .lock()
            .unwrap()
            .insert(name.to_string(), UniformValue::Mat4(*value));
        Ok(())
    }
}

// ============================================================================
// Mock TargetMesh
// ============================================================================

/// Mock mesh with settable modeled extents and clip bounds
pub struct MockTargetMesh {
    pub dimensions: Vec3,
    pub centroid: Vec3,
    pub near_bound: f32,
    pub far_bound: f32,
    /// Shared event log (op order across all mocks)
    pub events: Arc<Mutex<Vec<String>>>,
}

impl MockTargetMesh {
    pub fn new(events: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            dimensions: Vec3::new(100.0, 80.0, 60.0),
            centroid: Vec3::ZERO,
            near_bound: 26.0,
            far_bound: 374.0,
            events,
        }
    }

    /// Mock mesh reporting fixed clip bounds regardless of pose
    pub fn with_bounds(near_bound: f32, far_bound: f32, events: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            near_bound,
            far_bound,
            ..Self::new(events)
        }
    }
}

impl TargetMesh for MockTargetMesh {
    fn dimensions(&self) -> Vec3 {
        self.dimensions
    }

    fn centroid(&self) -> Vec3 {
        self.centroid
    }

    fn near_plane_bound(&self, _model: &Mat4, _camera_position: Vec3) -> f32 {
        self.events.lock().unwrap().push("near_plane_bound".to_string());
        self.near_bound
    }

    fn far_plane_bound(&self, _model: &Mat4, _camera_position: Vec3) -> f32 {
        self.events.lock().unwrap().push("far_plane_bound".to_string());
        self.far_bound
    }

    fn render(&self, _shader: &dyn ShaderProgram) -> Result<()> {
        self.events.lock().unwrap().push("render".to_string());
        Ok(())
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device with a settable framebuffer and a queueable error flag
pub struct MockGraphicsDevice {
    pub viewport: Viewport,
    pub framebuffer: Vec<u8>,
    pub framebuffer_width: u32,
    pub framebuffer_height: u32,
    /// Error returned (once) by the next poll_error call
    pub queued_error: Option<String>,
    /// Flags passed to the last clear call
    pub cleared: Option<ClearFlags>,
    /// Light state passed to the last set_light call
    pub light: Option<LightParams>,
    /// Shared event log (op order across all mocks)
    pub events: Arc<Mutex<Vec<String>>>,
}

impl MockGraphicsDevice {
    pub fn new(events: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            viewport: Viewport { x: 0, y: 0, width: 0, height: 0 },
            framebuffer: Vec::new(),
            framebuffer_width: 0,
            framebuffer_height: 0,
            queued_error: None,
            cleared: None,
            light: None,
            events,
        }
    }

    /// Install a synthetic RGBA8 framebuffer and matching viewport
    pub fn with_framebuffer(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        events: Arc<Mutex<Vec<String>>>,
    ) -> Self {
        assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            viewport: Viewport { x: 0, y: 0, width, height },
            framebuffer: pixels,
            framebuffer_width: width,
            framebuffer_height: height,
            ..Self::new(events)
        }
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn clear(&mut self, flags: ClearFlags) -> Result<()> {
        self.events.lock().unwrap().push("clear".to_string());
        self.cleared = Some(flags);
        Ok(())
    }

    fn set_light(&mut self, light: &LightParams) -> Result<()> {
        self.events.lock().unwrap().push("set_light".to_string());
        self.light = Some(*light);
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn read_pixels(&mut self, width: u32, height: u32, buffer: &mut [u8]) -> Result<()> {
        self.events.lock().unwrap().push("read_pixels".to_string());
        if width != self.framebuffer_width || height != self.framebuffer_height {
            return Err(Error::InvalidReadback(format!(
                "requested {}x{}, framebuffer is {}x{}",
                width, height, self.framebuffer_width, self.framebuffer_height
            )));
        }
        if buffer.len() != (width * height * 4) as usize {
            return Err(Error::InvalidReadback(format!(
                "buffer length {} does not match {}x{} RGBA8",
                buffer.len(),
                width,
                height
            )));
        }
        buffer.copy_from_slice(&self.framebuffer);
        Ok(())
    }

    fn poll_error(&mut self) -> Option<String> {
        self.events.lock().unwrap().push("poll_error".to_string());
        self.queued_error.take()
    }

    fn flush(&mut self) -> Result<()> {
        self.events.lock().unwrap().push("flush".to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
