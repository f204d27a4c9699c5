//! Scene module — render driver and frame state.
//!
//! Owns the target mesh, the clip planes, and the projection for the
//! current frame, and drives the graphics device through a full render
//! pass. Point-cloud extraction and transform metadata persistence sit
//! alongside because they read the same frame state.

mod clip_planes;
mod scene;
mod metadata;

pub use clip_planes::{
    ClipPlanes, BOX_HALF_DIAGONAL, FAR_PLANE_FACTOR, MIN_NEAR_PLANE, NEAR_PLANE_FACTOR,
};
pub use scene::{Scene, ASPECT_RATIO};
pub use metadata::save_transformation_metadata;
