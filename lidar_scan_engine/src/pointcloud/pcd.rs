/// PCD persistence - binary Point Cloud Data files
///
/// ASCII header followed by a raw native-endian f32 payload, one
/// (x, y, z, intensity) quadruple per point. The full file image is
/// built in memory and written with a single call so an I/O failure
/// cannot leave a truncated file behind.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::scan_info;

use super::reconstruct::PointSample;

const LOG_SOURCE: &str = "lidarscan::PointCloud";

/// Serialize points into a complete PCD file image (header + payload).
pub fn encode(points: &[PointSample]) -> Vec<u8> {
    let count = points.len();
    let header = format!(
        "VERSION .7\n\
         FIELDS x y z intensity\n\
         SIZE 4 4 4 4\n\
         TYPE F F F F\n\
         COUNT 1 1 1 1\n\
         WIDTH {count}\n\
         HEIGHT 1\n\
         VIEWPOINT 0 0 0 1 0 0 0\n\
         POINTS {count}\n\
         DATA binary\n"
    );

    let mut bytes = header.into_bytes();
    bytes.extend_from_slice(bytemuck::cast_slice(points));
    bytes
}

/// Write a PCD file in one shot.
pub fn write<P: AsRef<Path>>(path: P, points: &[PointSample]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode(points))?;

    scan_info!(
        LOG_SOURCE,
        "Wrote {} points to {}",
        points.len(),
        path.display()
    );

    Ok(())
}

#[cfg(test)]
#[path = "pcd_tests.rs"]
mod tests;
