/// GraphicsDevice trait - device-level operations for the render driver
///
/// Abstracts the rendering context (framebuffer clear, fixed lighting state,
/// viewport query, pixel readback, error polling). Implemented by the
/// embedding application on top of its GL/windowing layer; the engine never
/// touches the context directly.

use glam::Vec4;
use crate::error::Result;

bitflags::bitflags! {
    /// Framebuffer attachments cleared at the start of a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        /// Color attachment
        const COLOR = 1 << 0;
        /// Depth attachment
        const DEPTH = 1 << 1;
    }
}

/// Window-space viewport rectangle, GL convention (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge in pixels
    pub x: i32,
    /// Bottom edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Fixed lighting state uploaded once per frame.
///
/// The sensor model is a headlight co-located with the camera: a narrow
/// spot at the eye pointing down the optical axis, with near-zero
/// attenuation over the working range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightParams {
    /// Light position in eye space (w = 1: positional)
    pub position: Vec4,
    /// Spot direction in eye space (w = 0: directional)
    pub spot_direction: Vec4,
    /// Spot cutoff half-angle in degrees
    pub spot_cutoff: f32,
    /// Linear attenuation coefficient
    pub linear_attenuation: f32,
    /// Quadratic attenuation coefficient
    pub quadratic_attenuation: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            position: Vec4::new(0.0, 0.0, 0.0, 1.0),
            spot_direction: Vec4::new(0.0, 0.0, 1.0, 0.0),
            spot_cutoff: 10.0,
            linear_attenuation: 0.0001,
            quadratic_attenuation: 0.00000001,
        }
    }
}

/// Device-level operations required by the render driver.
///
/// One exclusive device per rendering context. Both `Scene::render` and
/// readback take `&mut dyn GraphicsDevice`, so concurrent frames against
/// a single context cannot compile.
pub trait GraphicsDevice {
    /// Clear the requested framebuffer attachments
    fn clear(&mut self, flags: ClearFlags) -> Result<()>;

    /// Upload the fixed lighting state
    fn set_light(&mut self, light: &LightParams) -> Result<()>;

    /// Current viewport rectangle
    fn viewport(&self) -> Viewport;

    /// Read back the color attachment as tightly packed RGBA8 rows,
    /// bottom row first.
    ///
    /// # Arguments
    ///
    /// * `width` - Requested width in pixels
    /// * `height` - Requested height in pixels
    /// * `buffer` - Destination, must hold exactly width * height * 4 bytes
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidReadback` if the requested dimensions or the
    /// buffer length do not match the framebuffer.
    fn read_pixels(&mut self, width: u32, height: u32, buffer: &mut [u8]) -> Result<()>;

    /// Poll the device for an accumulated error flag.
    ///
    /// Returns a human-readable description and clears the flag, or `None`
    /// if no error is pending. Polling after the draw call is diagnostic
    /// only and never fails the frame.
    fn poll_error(&mut self) -> Option<String>;

    /// Flush all issued commands to the device
    fn flush(&mut self) -> Result<()>;
}
