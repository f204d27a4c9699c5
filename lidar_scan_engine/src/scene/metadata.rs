/// Transformation metadata - plain-text pose records
///
/// Three tab-separated lines per file: camera position, model rotation,
/// camera rotation. Written next to the point cloud so the pose a scan
/// was taken under can be recovered later.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::scan_info;
use crate::transform::EulerPose;

const LOG_SOURCE: &str = "lidarscan::Metadata";

/// Append `extension` (dot included) to the file name, keeping any
/// extension the name already has: `scan.0` becomes `scan.0.transform`.
pub(crate) fn append_extension(basename: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(basename.as_os_str());
    name.push(extension);
    PathBuf::from(name)
}

/// Write the pose a frame was rendered under as `<basename>.transform`.
///
/// The full record is formatted first and written with a single call,
/// so an I/O failure cannot leave a truncated file behind.
pub fn save_transformation_metadata<P: AsRef<Path>>(basename: P, pose: &EulerPose) -> Result<()> {
    let path = append_extension(basename.as_ref(), ".transform");

    let record = format!(
        "{}\t{}\t{}\n{}\t{}\t{}\n{}\t{}\t{}\n",
        pose.camera_position.x,
        pose.camera_position.y,
        pose.camera_position.z,
        pose.model_rotation.x,
        pose.model_rotation.y,
        pose.model_rotation.z,
        pose.camera_rotation.x,
        pose.camera_rotation.y,
        pose.camera_rotation.z,
    );
    fs::write(&path, record)?;

    scan_info!(LOG_SOURCE, "Wrote transformation metadata to {}", path.display());

    Ok(())
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
