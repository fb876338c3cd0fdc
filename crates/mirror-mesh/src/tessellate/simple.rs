use super::Frame;
use crate::layout::drawing_dimensions;
use crate::mesh::Mesh;
use crate::partition::Half;
use glam::Vec2;

/// Grid stops `(position, uv)` along one axis.
///
/// A mirrored axis gets three stops: the midline carries the inner edge of
/// the real half's UV, so both halves run outward from it.
fn stops(lo: f32, hi: f32, uv_lo: f32, uv_hi: f32, real: Option<Half>) -> Vec<(f32, f32)> {
    let mid = (lo + hi) * 0.5;
    match real {
        None => vec![(lo, uv_lo), (hi, uv_hi)],
        Some(Half::Low) => vec![(lo, uv_lo), (mid, uv_hi), (hi, uv_lo)],
        Some(Half::High) => vec![(lo, uv_hi), (mid, uv_lo), (hi, uv_hi)],
    }
}

/// Stretch the real half or quadrant over its part of the rectangle and
/// mirror it across the rest. Grid vertices are shared between quads.
pub(super) fn generate(frame: &Frame, mesh: &mut Mesh, preserve_aspect: bool) {
    let image = frame.image;
    let v = drawing_dimensions(
        &frame.source,
        frame.rect,
        image.partition,
        preserve_aspect,
        image.pivot,
    );
    let uv = frame.source.outer_uv;
    let axes = image.partition.axes();

    let xs = stops(v.min.x, v.max.x, uv.min.x, uv.max.x, axes.x);
    let ys = stops(v.min.y, v.max.y, uv.min.y, uv.max.y, axes.y);

    let base_idx = mesh.vertices.len() as u32;
    for &(y, v_coord) in &ys {
        for &(x, u_coord) in &xs {
            mesh.add_vertex(Vec2::new(x, y), Vec2::new(u_coord, v_coord), image.tint);
        }
    }

    let columns = xs.len() as u32 - 1;
    let rows = ys.len() as u32 - 1;
    let stride = columns + 1;
    let at = |col: u32, row: u32| base_idx + row * stride + col;

    // Real cell first, then the mirrored ones.
    let real = (
        axes.x.map_or(0, |h| h.index() as u32),
        axes.y.map_or(0, |h| h.index() as u32),
    );
    let cells = std::iter::once(real).chain(
        (0..rows)
            .flat_map(|row| (0..columns).map(move |col| (col, row)))
            .filter(|&cell| cell != real),
    );

    for (col, row) in cells {
        let bl = at(col, row);
        let tl = at(col, row + 1);
        let tr = at(col + 1, row + 1);
        let br = at(col + 1, row);
        mesh.add_triangle(bl, tl, tr);
        mesh.add_triangle(tr, br, bl);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{covered_area, square, unit_sprite};
    use super::super::Tessellator;
    use crate::image::{DrawMode, FillParams, MirrorImage};
    use crate::partition::Partition;
    use crate::primitives::{Rect, SourceTexture};
    use glam::Vec2;

    #[test]
    fn test_left_half_mirrors_once() {
        let image = MirrorImage::new(unit_sprite()).with_partition(Partition::LeftHalf);
        let mut tessellator = Tessellator::new();
        let mesh = tessellator.tessellate(&image, square(100.0));

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 4);

        // Real quad on [0, 50] samples u 0..1.
        let real: Vec<_> = mesh.triangles().take(2).flatten().collect();
        assert!(real.iter().all(|v| v.pos[0] <= 50.0));
        for v in &real {
            assert_eq!(v.uv[0], v.pos[0] / 50.0);
        }

        // Mirrored quad on [50, 100] samples u 1..0.
        let mirrored: Vec<_> = mesh.triangles().skip(2).flatten().collect();
        assert!(mirrored.iter().all(|v| v.pos[0] >= 50.0));
        for v in &mirrored {
            assert_eq!(v.uv[0], (100.0 - v.pos[0]) / 50.0);
        }
    }

    #[test]
    fn test_quadrant_partitions_share_grid() {
        for partition in [
            Partition::TopRight,
            Partition::BottomRight,
            Partition::TopLeft,
            Partition::BottomLeft,
        ] {
            let image = MirrorImage::new(unit_sprite()).with_partition(partition);
            let mut tessellator = Tessellator::new();
            let mesh = tessellator.tessellate(&image, square(2.0));

            assert_eq!(mesh.vertex_count(), 9);
            assert_eq!(mesh.triangle_count(), 8);
            assert_eq!(covered_area(mesh), 4.0);

            // The outer corners all sample the real region's outer corner.
            let corners: Vec<_> = mesh
                .vertices
                .iter()
                .filter(|v| v.pos[0] != 1.0 && v.pos[1] != 1.0)
                .map(|v| v.uv)
                .collect();
            assert_eq!(corners.len(), 4);
            assert!(corners.windows(2).all(|w| w[0] == w[1]));
        }
    }

    #[test]
    fn test_mirrored_uv_is_reflection() {
        let uv = Rect::new(Vec2::new(0.25, 0.5), Vec2::new(0.5, 1.0));
        let sprite = SourceTexture::new(Vec2::new(16.0, 32.0), uv);
        let image = MirrorImage::new(sprite).with_partition(Partition::TopHalf);
        let mut tessellator = Tessellator::new();
        let mesh = tessellator.tessellate(&image, square(8.0));

        for v in &mesh.vertices {
            let expected_u = if v.pos[0] == 0.0 { 0.25 } else { 0.5 };
            assert_eq!(v.uv[0], expected_u);
        }

        // The top half samples v 0.5..1 upward; the bottom half is its reflection.
        let v_at = |y: f32| -> Vec<f32> {
            mesh.vertices
                .iter()
                .filter(|v| v.pos[1] == y)
                .map(|v| v.uv[1])
                .collect()
        };
        assert_eq!(v_at(8.0), vec![1.0, 1.0]);
        assert_eq!(v_at(4.0), vec![0.5, 0.5]);
        assert_eq!(v_at(0.0), vec![uv.mirror_y(0.5), uv.mirror_y(0.5)]);
    }

    #[test]
    fn test_complete_fill_matches_simple() {
        let simple = MirrorImage::new(unit_sprite()).with_partition(Partition::BottomRight);
        let filled = simple
            .clone()
            .with_draw_mode(DrawMode::Filled)
            .with_fill(FillParams::default().with_amount(0.9995));

        let a = Tessellator::new().tessellate(&simple, square(30.0)).clone();
        let b = Tessellator::new().tessellate(&filled, square(30.0)).clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_rect_is_well_formed() {
        let image = MirrorImage::new(unit_sprite()).with_partition(Partition::TopLeft);
        let mut tessellator = Tessellator::new();
        let mesh = tessellator.tessellate(&image, Rect::ZERO);

        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(covered_area(mesh), 0.0);
    }
}
