use super::{radial, Frame};
use crate::color::Color;
use crate::geometry::divide_polygon;
use crate::image::{FillMethod, FillParams};
use crate::layout::drawing_dimensions;
use crate::mesh::Mesh;
use crate::partition::Partition;
use crate::primitives::Rect;
use glam::Vec2;

/// Maps normalized shapes onto the drawing rectangle.
struct Canvas {
    rect: Rect,
    uv: Rect,
    partition: Partition,
    tint: Color,
}

impl Canvas {
    /// Fan a convex polygon after cutting it along the partition's midlines.
    ///
    /// Each piece samples the texture through its own region, so pieces on
    /// the mirrored side come out reflected.
    fn add_polygon(&self, mesh: &mut Mesh, points: &[Vec2]) {
        let division = divide_polygon(points, self.partition.splits_x(), self.partition.splits_y());

        for region in self.partition.regions() {
            let fan: Vec<(Vec2, Vec2)> = division
                .part(&region)
                .iter()
                .map(|&p| (self.rect.lerp(p), region.map_uv(p, self.uv)))
                .collect();
            mesh.add_fan(&fan, self.tint);
        }
    }

    /// Fan a polygon whose triangles never straddle a midline.
    ///
    /// Every vertex picks its UV from the region it sits in. Reflection is
    /// continuous across the midlines, so shared vertices agree.
    fn add_centered_fan(&self, mesh: &mut Mesh, points: &[Vec2]) {
        let fan: Vec<(Vec2, Vec2)> = points
            .iter()
            .map(|&p| (self.rect.lerp(p), self.partition.locate(p).map_uv(p, self.uv)))
            .collect();
        mesh.add_fan(&fan, self.tint);
    }
}

/// Progressive reveal: only `fill.amount` of the shape is emitted, swept
/// linearly or radially over the whole mirrored rectangle.
pub(super) fn generate(frame: &Frame, mesh: &mut Mesh) {
    let image = frame.image;
    let fill = &image.fill;
    if fill.is_empty() {
        return;
    }

    let canvas = Canvas {
        rect: drawing_dimensions(
            &frame.source,
            frame.rect,
            image.partition,
            image.preserve_aspect,
            image.pivot,
        ),
        uv: frame.source.outer_uv,
        partition: image.partition,
        tint: image.tint,
    };

    match fill.method {
        FillMethod::Horizontal | FillMethod::Vertical => linear(&canvas, mesh, fill),
        FillMethod::Radial90 => {
            let quad = radial::quarter_sweep(fill.amount, fill.origin, fill.clockwise);
            canvas.add_polygon(mesh, &quad);
        }
        FillMethod::Radial180 => {
            for quad in radial::half_sweep(fill.amount, fill.origin, fill.clockwise) {
                canvas.add_polygon(mesh, &quad);
            }
        }
        FillMethod::Radial360 => {
            let fan = radial::full_sweep(fill.amount, fill.origin, fill.clockwise);
            canvas.add_centered_fan(mesh, &fan);
        }
    }
}

/// One quad per region, cut where the reveal edge crosses it. Regions the
/// edge hasn't reached yet still get a zero-area quad on their near side.
fn linear(canvas: &Canvas, mesh: &mut Mesh, fill: &FillParams) {
    let axis = match fill.method {
        FillMethod::Horizontal => 0,
        _ => 1,
    };

    for region in canvas.partition.regions() {
        let bounds = region.bounds();
        let (lo, hi) = (bounds.min[axis], bounds.max[axis]);
        let (from, to) = if fill.origin == 0 {
            (lo, fill.amount.clamp(lo, hi))
        } else {
            ((1.0 - fill.amount).clamp(lo, hi), hi)
        };

        let mut min = bounds.min;
        let mut max = bounds.max;
        min[axis] = from;
        max[axis] = to;

        mesh.add_rect(
            canvas.rect.lerp(min),
            canvas.rect.lerp(max),
            region.map_uv(min, canvas.uv),
            region.map_uv(max, canvas.uv),
            canvas.tint,
        );
    }
}
