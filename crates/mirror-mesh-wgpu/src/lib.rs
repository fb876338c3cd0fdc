//! # mirror-mesh-wgpu
//!
//! WGPU upload helpers for mirror-mesh: a packed vertex format and
//! growable vertex/index buffers.

mod buffers;
mod vertex;

pub use buffers::*;
pub use vertex::*;
