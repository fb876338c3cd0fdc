use super::Frame;
use crate::geometry::lerp_f32;
use crate::layout::adjusted_borders;
use crate::mesh::Mesh;
use glam::Vec2;

/// Upper bound on the vertices one tiled image may emit.
pub const MAX_TILED_VERTICES: usize = 65_000;

const VERTICES_PER_TILE: usize = 4;

/// Number of tiles across the interior of a tiled image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TileGrid {
    columns: usize,
    rows: usize,
}

impl TileGrid {
    fn covering(extent: Vec2, tile: Vec2) -> Self {
        let count = |extent: f32, tile: f32| {
            if extent > 0.0 && tile > 0.0 {
                (extent / tile).ceil() as usize
            } else {
                0
            }
        };
        Self {
            columns: count(extent.x, tile.x),
            rows: count(extent.y, tile.y),
        }
    }

    /// Vertices needed for the interior tiles plus border strips and corners.
    fn vertex_count(self, bordered: bool, fill_center: bool) -> f64 {
        let (columns, rows) = (self.columns as f64, self.rows as f64);
        let center = if fill_center { columns * rows } else { 0.0 };
        let edges = if bordered {
            2.0 * (columns + rows) + 4.0
        } else {
            0.0
        };
        (center + edges) * VERTICES_PER_TILE as f64
    }

    /// Shrink the grid until it fits the vertex budget, keeping its aspect.
    fn fit_budget(self, bordered: bool, fill_center: bool) -> Self {
        if self.vertex_count(bordered, fill_center) <= MAX_TILED_VERTICES as f64 {
            return self;
        }

        let max_tiles = (MAX_TILED_VERTICES / VERTICES_PER_TILE) as f64;
        let (columns, rows) = (self.columns as f64, self.rows as f64);

        let fitted = if fill_center {
            // Border strips behave like one extra tile on each side.
            let extra = if bordered { 2.0 } else { 0.0 };
            let ratio = (columns + extra) / (rows + extra);
            let fit = |n: f64| (n.floor() - extra).max(1.0);

            let rows = fit((max_tiles / ratio).sqrt());
            let columns = fit((max_tiles * ratio).sqrt()).min(fit(max_tiles / (rows + extra)));
            let rows = rows.min(fit(max_tiles / (columns + extra)));
            TileGrid {
                columns: columns as usize,
                rows: rows as usize,
            }
        } else {
            // Only the strips along the four edges, plus the corners.
            let budget = ((max_tiles - 4.0) / 2.0).floor();
            let share = |n: f64| {
                if n > 0.0 {
                    (budget * n / (columns + rows)).floor().max(1.0) as usize
                } else {
                    0
                }
            };
            TileGrid {
                columns: share(columns),
                rows: share(rows),
            }
        };

        log::warn!(
            "{}x{} sprite tiles exceed {} vertices, enlarging tiles to a {}x{} grid",
            self.columns,
            self.rows,
            MAX_TILED_VERTICES,
            fitted.columns,
            fitted.rows
        );
        fitted
    }
}

/// Clip a tile spanning `start..end` against `limit`, returning its end and
/// the fraction of it that stays visible. The last tile always ends exactly
/// on `limit`.
fn clip_tile(start: f32, end: f32, limit: f32, last: bool) -> (f32, f32) {
    if end > limit || last {
        let fraction = if end > start {
            ((limit - start) / (end - start)).clamp(0.0, 1.0)
        } else {
            1.0
        };
        (limit, fraction)
    } else {
        (end, 1.0)
    }
}

/// UV span of a tile showing `fraction` of the texture, read backwards on
/// reflected tiles.
fn tile_span(min: f32, max: f32, fraction: f32, reflected: bool) -> (f32, f32) {
    if reflected {
        (max, lerp_f32(max, min, fraction))
    } else {
        (min, lerp_f32(min, max, fraction))
    }
}

/// Repeat the sprite interior across the rectangle inside its borders.
///
/// Odd columns are reflected on partitions that mirror horizontally, odd
/// rows on partitions that mirror vertically. Border strips and corners
/// sample the sprite edges as they are.
pub(super) fn generate(frame: &Frame, mesh: &mut Mesh) {
    let image = frame.image;
    let source = &frame.source;
    let axes = image.partition.axes();
    let scale = 1.0 / image.pixels_per_unit;
    let size = frame.rect.size();
    let origin = frame.rect.min;

    let mut tile = (source.size - source.border.low() - source.border.high()) * scale;
    let border = adjusted_borders(source.border.scale(scale), frame.rect, image.partition);
    let (outer, inner) = (source.outer_uv, source.inner_uv);
    let (uv_min, uv_max) = (inner.min, inner.max);

    // Oversized far borders may not cross the near ones.
    let lo = border.low().min(size);
    let hi = (size - border.high()).max(lo);
    let extent = hi - lo;
    if tile.x <= 0.0 {
        tile.x = extent.x;
    }
    if tile.y <= 0.0 {
        tile.y = extent.y;
    }

    if source.tiles_seamlessly() {
        // The sampler repeats the texture; one quad with stretched UVs suffices.
        if image.fill_center {
            let repeat = |extent: f32, tile: f32| if tile > 0.0 { extent / tile } else { 1.0 };
            let uv_scale = Vec2::new(repeat(extent.x, tile.x), repeat(extent.y, tile.y));
            mesh.add_rect(
                origin + lo,
                origin + hi,
                uv_min * uv_scale,
                uv_max * uv_scale,
                image.tint,
            );
        }
        return;
    }

    let bordered = source.has_border();
    if !bordered && !image.fill_center {
        return;
    }

    let covering = TileGrid::covering(extent, tile);
    let grid = covering.fit_budget(bordered, image.fill_center);
    if grid != covering {
        tile = extent / Vec2::new(grid.columns as f32, grid.rows as f32);
    }

    let column = |col: usize| {
        let x1 = lo.x + col as f32 * tile.x;
        let x2 = lo.x + (col + 1) as f32 * tile.x;
        let (x2, fraction) = clip_tile(x1, x2, hi.x, col + 1 == grid.columns);
        (x1, x2, fraction)
    };
    let row = |row: usize| {
        let y1 = lo.y + row as f32 * tile.y;
        let y2 = lo.y + (row + 1) as f32 * tile.y;
        let (y2, fraction) = clip_tile(y1, y2, hi.y, row + 1 == grid.rows);
        (y1, y2, fraction)
    };

    if image.fill_center {
        for j in 0..grid.rows {
            let (y1, y2, fy) = row(j);
            let (v0, v1) = tile_span(uv_min.y, uv_max.y, fy, axes.y.is_some() && j % 2 == 1);
            for i in 0..grid.columns {
                let (x1, x2, fx) = column(i);
                let (u0, u1) = tile_span(uv_min.x, uv_max.x, fx, axes.x.is_some() && i % 2 == 1);
                mesh.add_rect(
                    origin + Vec2::new(x1, y1),
                    origin + Vec2::new(x2, y2),
                    Vec2::new(u0, v0),
                    Vec2::new(u1, v1),
                    image.tint,
                );
            }
        }
    }

    if !bordered {
        return;
    }

    // Left and right strips.
    for j in 0..grid.rows {
        let (y1, y2, fy) = row(j);
        let v1 = lerp_f32(uv_min.y, uv_max.y, fy);
        mesh.add_rect(
            origin + Vec2::new(0.0, y1),
            origin + Vec2::new(lo.x, y2),
            Vec2::new(outer.min.x, uv_min.y),
            Vec2::new(uv_min.x, v1),
            image.tint,
        );
        mesh.add_rect(
            origin + Vec2::new(hi.x, y1),
            origin + Vec2::new(size.x, y2),
            Vec2::new(uv_max.x, uv_min.y),
            Vec2::new(outer.max.x, v1),
            image.tint,
        );
    }

    // Bottom and top strips.
    for i in 0..grid.columns {
        let (x1, x2, fx) = column(i);
        let u1 = lerp_f32(uv_min.x, uv_max.x, fx);
        mesh.add_rect(
            origin + Vec2::new(x1, 0.0),
            origin + Vec2::new(x2, lo.y),
            Vec2::new(uv_min.x, outer.min.y),
            Vec2::new(u1, uv_min.y),
            image.tint,
        );
        mesh.add_rect(
            origin + Vec2::new(x1, hi.y),
            origin + Vec2::new(x2, size.y),
            Vec2::new(uv_min.x, uv_max.y),
            Vec2::new(u1, outer.max.y),
            image.tint,
        );
    }

    // Corners.
    let corners = [
        (Vec2::ZERO, lo, outer.min, uv_min),
        (
            Vec2::new(hi.x, 0.0),
            Vec2::new(size.x, lo.y),
            Vec2::new(uv_max.x, outer.min.y),
            Vec2::new(outer.max.x, uv_min.y),
        ),
        (
            Vec2::new(0.0, hi.y),
            Vec2::new(lo.x, size.y),
            Vec2::new(outer.min.x, uv_max.y),
            Vec2::new(uv_min.x, outer.max.y),
        ),
        (hi, size, uv_max, outer.max),
    ];
    for (pos_min, pos_max, corner_uv_min, corner_uv_max) in corners {
        mesh.add_rect(
            origin + pos_min,
            origin + pos_max,
            corner_uv_min,
            corner_uv_max,
            image.tint,
        );
    }
}
