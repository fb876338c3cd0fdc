//! # mirror-mesh
//!
//! Graphics backend agnostic tessellator for mirrored sprite images.
//!
//! A [`MirrorImage`] draws a whole rectangle from half or a quarter of a
//! sprite, reflecting it across the missing halves. This crate turns the
//! image configuration and a destination rectangle into a triangle [`Mesh`];
//! uploading and drawing is left to backend crates like `mirror-mesh-wgpu`.

mod cache;
mod color;
mod error;
mod geometry;
mod image;
mod layout;
mod mesh;
mod partition;
mod primitives;
mod tessellate;

pub use cache::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use image::*;
pub use layout::*;
pub use mesh::*;
pub use partition::*;
pub use primitives::*;
pub use tessellate::*;
