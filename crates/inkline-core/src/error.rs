// File: crates/inkline-core/src/error.rs
// Summary: Rendering error type.

use thiserror::Error;

/// Possible failures of the headless rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to allocate {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back rendered pixels")]
    Readback,
    #[error("PNG encoding failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
