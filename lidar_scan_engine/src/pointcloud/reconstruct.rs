/// Point-cloud reconstruction - per-pixel inversion of the render transform
///
/// The depth-encoding shader packs a depth proxy into the green and blue
/// channels of each rendered pixel (`gb = green*255 + blue`, a contract
/// consumed here, never re-derived) and the return intensity into red.
/// Reconstruction un-projects each hit pixel back through the inverse of
/// the projection and model-view used to render it, then overrides the
/// un-projected Z with the channel-decoded metric depth, which survives
/// the round trip with less quantization error.

use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DVec3};

use crate::graphics_device::Viewport;
use crate::scene::ClipPlanes;
use crate::transform::viewport_to_ndc;

/// One reconstructed sample: camera-space position plus return intensity.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
}

/// Reconstruct camera-space samples from a rendered RGBA8 buffer.
///
/// `buffer` must hold `width * height * 4` bytes laid out row-major,
/// rendered with the given model-view, projection, and clip planes.
/// Pixels with a zero depth proxy are background (no return) and emit
/// no sample, so the output length is at most `width * height`.
///
/// Samples are emitted row-major by (row, col).
pub fn reconstruct(
    buffer: &[u8],
    width: u32,
    height: u32,
    model_view: &DMat4,
    projection: &DMat4,
    viewport: &Viewport,
    clip: &ClipPlanes,
) -> Vec<PointSample> {
    debug_assert_eq!(buffer.len(), (width * height * 4) as usize);

    // One inversion for the whole frame, not one per pixel.
    let inverse_mvp = (*projection * *model_view).inverse();
    let near = clip.near as f64;
    let far = clip.far as f64;

    let mut points = Vec::new();
    for row in 0..height {
        for col in 0..width {
            let idx = (4 * (row * width + col)) as usize;
            let red = buffer[idx];
            let green = buffer[idx + 1];
            let blue = buffer[idx + 2];

            // Depth proxy packed by the shader as green*255 + blue.
            let gb = green as u32 * 255 + blue as u32;
            if gb == 0 {
                continue;
            }

            let t = gb as f64 / 65536.0;
            let depth = t * (far - near) + near;

            let win = DVec3::new(col as f64, row as f64, t);
            let object = inverse_mvp.project_point3(viewport_to_ndc(win, viewport));
            let eye = model_view.transform_point3(object);

            points.push(PointSample {
                x: (-eye.x) as f32,
                y: eye.y as f32,
                z: depth as f32,
                intensity: red as f32 / 256.0,
            });
        }
    }

    points
}

#[cfg(test)]
#[path = "reconstruct_tests.rs"]
mod tests;
