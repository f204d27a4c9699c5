//! Point-cloud module — depth-buffer reconstruction and PCD persistence.
//!
//! Consumes the color buffer written by the external depth-encoding
//! shader: green/blue carry a packed depth proxy, red carries return
//! intensity. Reconstruction inverts the render transform per pixel;
//! the PCD writer persists the samples in one shot.

mod reconstruct;
pub mod pcd;

pub use reconstruct::{reconstruct, PointSample};
