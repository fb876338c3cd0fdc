use crate::image::{DrawMode, MirrorImage};
use crate::mesh::Mesh;
use crate::primitives::{Rect, SourceTexture};

mod filled;
mod radial;
mod simple;
mod sliced;
mod tiled;

pub use tiled::MAX_TILED_VERTICES;

/// Anything that can append its geometry to a mesh.
pub trait Tessellatable {
    /// Append triangles covering `rect` to `mesh`.
    fn populate_mesh(&self, rect: Rect, mesh: &mut Mesh);
}

/// Tessellator converts mirror images into triangle meshes
pub struct Tessellator {
    mesh: Mesh,
}

impl Tessellator {
    pub fn new() -> Self {
        Self { mesh: Mesh::new() }
    }

    /// Tessellate `item` into a fresh mesh. Returns a reference to the internal mesh.
    pub fn tessellate<T: Tessellatable + ?Sized>(&mut self, item: &T, rect: Rect) -> &Mesh {
        self.mesh.clear();
        item.populate_mesh(rect, &mut self.mesh);
        &self.mesh
    }

    /// The mesh produced by the last call to [`Tessellator::tessellate`].
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-call inputs shared by every strategy.
struct Frame<'a> {
    image: &'a MirrorImage,
    source: SourceTexture,
    rect: Rect,
}

impl Tessellatable for MirrorImage {
    /// # Panics
    ///
    /// Panics if the configuration is invalid, see [`MirrorImage::validate`].
    fn populate_mesh(&self, rect: Rect, mesh: &mut Mesh) {
        if let Err(err) = self.validate() {
            panic!("invalid mirror image configuration: {err}");
        }

        let frame = Frame {
            image: self,
            source: self.source(),
            rect,
        };
        let first_vertex = mesh.vertex_count();

        match self.draw_mode {
            DrawMode::Simple => simple::generate(&frame, mesh, self.preserve_aspect),
            DrawMode::Sliced if !frame.source.has_border() => {
                log::debug!("sliced image without border, drawing as simple");
                simple::generate(&frame, mesh, false);
            }
            DrawMode::Sliced => sliced::generate(&frame, mesh),
            DrawMode::Tiled => tiled::generate(&frame, mesh),
            DrawMode::Filled if self.fill.is_complete() => {
                simple::generate(&frame, mesh, self.preserve_aspect)
            }
            DrawMode::Filled => filled::generate(&frame, mesh),
        }

        log::trace!(
            "{:?}/{:?} produced {} vertices",
            self.draw_mode,
            self.partition,
            mesh.vertex_count() - first_vertex
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::image::{FillMethod, FillParams};
    use crate::partition::Partition;
    use crate::primitives::Insets;
    use glam::Vec2;
    use proptest::prelude::*;

    pub(super) fn unit_sprite() -> SourceTexture {
        SourceTexture::new(Vec2::new(64.0, 64.0), Rect::UNIT)
    }

    pub(super) fn bordered_sprite() -> SourceTexture {
        SourceTexture::from_pixels(
            Vec2::new(64.0, 64.0),
            Rect::from_min_size(Vec2::ZERO, Vec2::new(64.0, 64.0)),
            Insets::uniform(16.0),
        )
    }

    pub(super) fn square(size: f32) -> Rect {
        Rect::from_min_size(Vec2::ZERO, Vec2::splat(size))
    }

    /// Sum of unsigned triangle areas.
    pub(super) fn covered_area(mesh: &Mesh) -> f32 {
        let total: f64 = mesh
            .triangles()
            .map(|[a, b, c]| {
                let (a, b, c) = (a.position(), b.position(), c.position());
                f64::from((b - a).perp_dot(c - a).abs() * 0.5)
            })
            .sum();
        total as f32
    }

    fn draw_modes() -> [DrawMode; 4] {
        [DrawMode::Simple, DrawMode::Sliced, DrawMode::Tiled, DrawMode::Filled]
    }

    #[test]
    fn test_tessellate_clears_previous_output() {
        let image = MirrorImage::new(unit_sprite());
        let mut tessellator = Tessellator::new();

        let first = tessellator.tessellate(&image, square(100.0)).clone();
        let second = tessellator.tessellate(&image, square(100.0));

        assert_eq!(&first, second);
        assert_eq!(second.vertex_count(), 6);
    }

    #[test]
    fn test_indices_reference_vertices() {
        let mut tessellator = Tessellator::new();
        for partition in Partition::ALL {
            for draw_mode in draw_modes() {
                let image = MirrorImage::new(bordered_sprite())
                    .with_partition(partition)
                    .with_draw_mode(draw_mode)
                    .with_pixels_per_unit(4.0)
                    .with_fill(FillParams::default().with_amount(0.6));
                let mesh = tessellator.tessellate(&image, square(100.0));

                assert!(!mesh.is_empty(), "{partition:?}/{draw_mode:?}");
                assert_eq!(mesh.indices.len() % 3, 0);
                let count = mesh.vertex_count() as u32;
                assert!(mesh.indices.iter().all(|&i| i < count));
            }
        }
    }

    #[test]
    fn test_full_reveal_covers_destination() {
        let mut tessellator = Tessellator::new();
        for partition in Partition::ALL {
            for draw_mode in draw_modes() {
                let image = MirrorImage::new(bordered_sprite())
                    .with_partition(partition)
                    .with_draw_mode(draw_mode)
                    .with_pixels_per_unit(4.0);
                let rect = Rect::from_min_size(Vec2::new(-20.0, 5.0), Vec2::new(120.0, 80.0));
                let mesh = tessellator.tessellate(&image, rect);

                let area = covered_area(mesh);
                assert!(
                    (area - rect.area()).abs() < 1e-2,
                    "{partition:?}/{draw_mode:?}: {area}"
                );
            }
        }
    }

    #[test]
    fn test_absent_texture_still_tessellates() {
        let mut tessellator = Tessellator::new();
        for draw_mode in draw_modes() {
            let image = MirrorImage::default()
                .with_partition(Partition::TopRight)
                .with_draw_mode(draw_mode);
            let mesh = tessellator.tessellate(&image, square(10.0));

            assert!((covered_area(mesh) - 100.0).abs() < 1e-3, "{draw_mode:?}");
            assert!(mesh.vertices.iter().all(|v| v.uv == [0.0, 0.0]));
        }
    }

    #[test]
    fn test_tint_reaches_every_vertex() {
        let tint = Color::from_rgba8(255, 0, 0, 128);
        let image = MirrorImage::new(unit_sprite())
            .with_partition(Partition::BottomLeft)
            .with_tint(tint);
        let mut tessellator = Tessellator::new();
        let mesh = tessellator.tessellate(&image, square(1.0));

        assert!(mesh.vertices.iter().all(|v| v.color == <[f32; 4]>::from(tint)));
    }

    #[test]
    #[should_panic(expected = "fill origin")]
    fn test_invalid_fill_origin_fails_fast() {
        let mut image = MirrorImage::new(unit_sprite()).with_draw_mode(DrawMode::Filled);
        image.fill = FillParams {
            method: FillMethod::Vertical,
            amount: 0.5,
            origin: 3,
            clockwise: true,
        };
        Tessellator::new().tessellate(&image, square(1.0));
    }

    fn any_partition() -> impl Strategy<Value = Partition> {
        (0..Partition::ALL.len()).prop_map(|i| Partition::ALL[i])
    }

    fn any_fill_method() -> impl Strategy<Value = FillMethod> {
        prop_oneof![
            Just(FillMethod::Horizontal),
            Just(FillMethod::Vertical),
            Just(FillMethod::Radial90),
            Just(FillMethod::Radial180),
            Just(FillMethod::Radial360),
        ]
    }

    proptest! {
        #[test]
        fn prop_tessellation_is_idempotent(
            partition in any_partition(),
            method in any_fill_method(),
            origin in 0u8..2,
            amount in 0.0f32..1.0,
            clockwise in any::<bool>(),
            w in 1.0f32..500.0,
            h in 1.0f32..500.0,
        ) {
            let fill = FillParams::new(method, origin).unwrap().with_amount(amount).with_clockwise(clockwise);
            let image = MirrorImage::new(bordered_sprite())
                .with_partition(partition)
                .with_draw_mode(DrawMode::Filled)
                .with_fill(fill);
            let rect = Rect::from_min_size(Vec2::ZERO, Vec2::new(w, h));

            let first = Tessellator::new().tessellate(&image, rect).clone();
            let second = Tessellator::new().tessellate(&image, rect).clone();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_geometry_stays_inside_rect(
            partition in any_partition(),
            draw_mode in prop_oneof![
                Just(DrawMode::Simple),
                Just(DrawMode::Sliced),
                Just(DrawMode::Tiled),
                Just(DrawMode::Filled),
            ],
            method in any_fill_method(),
            amount in 0.0f32..1.0,
            w in 1.0f32..300.0,
            h in 1.0f32..300.0,
        ) {
            let fill = FillParams::new(method, 1).unwrap().with_amount(amount);
            let image = MirrorImage::new(bordered_sprite())
                .with_partition(partition)
                .with_draw_mode(draw_mode)
                .with_fill(fill);
            let rect = Rect::from_min_size(Vec2::new(3.0, -7.0), Vec2::new(w, h));
            let mut tessellator = Tessellator::new();
            let mesh = tessellator.tessellate(&image, rect);

            let eps = 1e-3;
            for v in &mesh.vertices {
                prop_assert!(v.pos[0] >= rect.min.x - eps && v.pos[0] <= rect.max.x + eps);
                prop_assert!(v.pos[1] >= rect.min.y - eps && v.pos[1] <= rect.max.y + eps);
            }
            prop_assert!(covered_area(mesh) <= rect.area() * (1.0 + 1e-4) + eps);
        }
    }
}
