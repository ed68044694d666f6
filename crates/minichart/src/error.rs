// File: crates/minichart/src/error.rs
// Summary: Typed rendering errors so callers can detect misconfiguration
// instead of a blank chart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Allocation of the backing raster buffer failed.
    #[error("failed to allocate {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },

    /// Pixel ratio must be finite and strictly positive.
    #[error("invalid pixel ratio {0}")]
    InvalidPixelRatio(f32),

    /// The surface leaves no drawable extent once chart margins are applied.
    #[error("surface {width}x{height} too small for chart margins")]
    SurfaceTooSmall { width: i32, height: i32 },

    /// PNG encoding of the surface snapshot failed.
    #[error("PNG encoding failed")]
    PngEncode,

    /// Readback of surface pixels into an RGBA8 buffer failed.
    #[error("pixel readback failed")]
    PixelReadback,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
