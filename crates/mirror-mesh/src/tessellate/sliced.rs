use super::Frame;
use crate::layout::adjusted_borders;
use crate::mesh::Mesh;
use crate::partition::Half;
use glam::Vec2;

/// Slice boundaries along one axis, in sprite-relative units.
struct Slices {
    pos: [f32; 4],
    uv: [f32; 4],
}

/// Outer edge, border inner edge, far border inner edge, far outer edge.
///
/// On a mirrored axis the far half is the reflection of the real half, so
/// it reuses the real side's padding, border and UVs.
fn slices(
    size: f32,
    padding: (f32, f32),
    border: (f32, f32),
    outer: (f32, f32),
    inner: (f32, f32),
    real: Option<Half>,
) -> Slices {
    let (pad, edge, outer_uv, inner_uv) = match real {
        None => {
            return Slices {
                pos: [padding.0, border.0, size - border.1, size - padding.1],
                uv: [outer.0, inner.0, inner.1, outer.1],
            }
        }
        Some(Half::Low) => (padding.0, border.0, outer.0, inner.0),
        Some(Half::High) => (padding.1, border.1, outer.1, inner.1),
    };

    Slices {
        pos: [pad, edge, size - edge, size - pad],
        uv: [outer_uv, inner_uv, inner_uv, outer_uv],
    }
}

/// 9-patch: corners keep their size, edges stretch along one axis, the
/// center along both.
pub(super) fn generate(frame: &Frame, mesh: &mut Mesh) {
    let image = frame.image;
    let source = &frame.source;
    let scale = 1.0 / image.pixels_per_unit;
    let padding = source.padding.scale(scale);
    let border = adjusted_borders(source.border.scale(scale), frame.rect, image.partition);
    let axes = image.partition.axes();
    let size = frame.rect.size();
    let (outer, inner) = (source.outer_uv, source.inner_uv);

    let [x, y] = [0, 1].map(|axis| {
        slices(
            size[axis],
            (padding.low()[axis], padding.high()[axis]),
            (border.low()[axis], border.high()[axis]),
            (outer.min[axis], outer.max[axis]),
            (inner.min[axis], inner.max[axis]),
            axes.get(axis),
        )
    });

    for col in 0..3 {
        for row in 0..3 {
            if !image.fill_center && col == 1 && row == 1 {
                continue;
            }

            mesh.add_rect(
                frame.rect.min + Vec2::new(x.pos[col], y.pos[row]),
                frame.rect.min + Vec2::new(x.pos[col + 1], y.pos[row + 1]),
                Vec2::new(x.uv[col], y.uv[row]),
                Vec2::new(x.uv[col + 1], y.uv[row + 1]),
                image.tint,
            );
        }
    }
}
