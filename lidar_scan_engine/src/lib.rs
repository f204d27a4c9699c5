/*!
# LidarScan3D Engine

Transform pipeline and depth-buffer point-cloud reconstruction for a
simulated LIDAR scanner.

This crate renders a scanned target (asteroid, spacecraft) through an
external depth-encoding shader and reconstructs metric point clouds
from the frames it renders. Graphics resources stay behind traits so the
engine never touches a GPU API directly: the embedding application
implements the device, shader, and mesh collaborators on top of its own
context layer.

## Architecture

- **transform**: pose adapters (Euler and physics calling conventions)
  and the model/view/projection matrix builders
- **scene**: clip-plane estimation, the per-frame render driver, and
  transformation metadata persistence
- **pointcloud**: per-pixel inversion of the render transform and PCD
  persistence
- **graphics_device**: collaborator traits implemented by the embedding
  application (`GraphicsDevice`, `ShaderProgram`, `TargetMesh`)
- **log**: console logging with a swappable `Logger` implementation

The render driver owns the target mesh and drives one frame at a time;
point-cloud extraction reads back the frame those same matrices
rendered.
*/

// Internal modules
mod error;
pub mod log;
pub mod graphics_device;
pub mod transform;
pub mod scene;
pub mod pointcloud;

// Error types
pub use error::{Error, Result};

// Core pipeline types
pub use graphics_device::{
    ClearFlags, GraphicsDevice, LightParams, ShaderProgram, TargetMesh, Viewport,
};
pub use pointcloud::PointSample;
pub use scene::{ClipPlanes, Scene};
pub use transform::{EulerPose, PhysicsPose, Pose};

// Re-export math library at crate root
pub use glam;
