use crate::image::FillMethod;
use thiserror::Error;

/// Configuration errors caught before tessellation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("fill origin {origin} is out of range for {method:?} fill (expected 0..{count})")]
    InvalidFillOrigin {
        method: FillMethod,
        origin: u8,
        count: u8,
    },
    #[error("pixels per unit must be positive and finite, got {0}")]
    InvalidPixelsPerUnit(f32),
    #[error("fill amount must be finite, got {0}")]
    NonFiniteFillAmount(f32),
}
