//! Error types for the LidarScan3D engine
//!
//! This module defines the error types used throughout the engine,
//! including clip-plane estimation, graphics-device calls, framebuffer
//! readback, and file persistence.

use std::fmt;

/// Result type for LidarScan3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// LidarScan3D engine errors
#[derive(Debug)]
pub enum Error {
    /// Clip-plane estimation produced an inverted projection volume.
    /// The offending frame must not be rendered.
    DegenerateClipPlanes {
        /// Near plane after margin and floor
        near: f32,
        /// Far plane after margin
        far: f32,
    },

    /// Failure reported by a graphics collaborator (device, shader, mesh)
    Graphics(String),

    /// Readback request does not match the framebuffer
    InvalidReadback(String),

    /// I/O failure while persisting an output file
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateClipPlanes { near, far } => {
                write!(f, "Degenerate clip planes: near = {}, far = {}", near, far)
            }
            Error::Graphics(msg) => write!(f, "Graphics device error: {}", msg),
            Error::InvalidReadback(msg) => write!(f, "Invalid readback: {}", msg),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
