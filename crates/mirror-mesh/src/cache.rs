use crate::image::MirrorImage;
use crate::mesh::Mesh;
use crate::primitives::Rect;
use crate::tessellate::Tessellator;

/// Keeps the mesh of the last tessellated image and rebuilds it only when
/// the image or the rectangle changed.
///
/// Any change triggers a full rebuild; meshes are never patched in place.
#[derive(Default)]
pub struct MeshCache {
    tessellator: Tessellator,
    key: Option<(MirrorImage, Rect)>,
    rebuilds: usize,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mesh for `image` drawn into `rect`, regenerated if stale.
    ///
    /// # Panics
    ///
    /// Panics if `image` fails [`MirrorImage::validate`].
    pub fn mesh(&mut self, image: &MirrorImage, rect: Rect) -> &Mesh {
        let fresh = matches!(&self.key, Some((cached, cached_rect)) if cached == image && *cached_rect == rect);
        if !fresh {
            log::trace!("rebuilding mirror mesh for {:?} in {:?}", image.partition, rect);
            self.tessellator.tessellate(image, rect);
            self.key = Some((image.clone(), rect));
            self.rebuilds += 1;
        }
        self.tessellator.mesh()
    }

    /// Force the next [`MeshCache::mesh`] call to rebuild.
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Number of rebuilds so far.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}
