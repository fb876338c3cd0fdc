//! Normalized-space geometry shared by the fill strategies.
//!
//! Everything here works in the unit square; callers map the results into
//! the destination rectangle afterwards.

use crate::partition::Region;
use glam::Vec2;

/// Linear interpolation between two scalars
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Unsigned area of a simple polygon (shoelace formula).
pub fn polygon_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice.abs() * 0.5
}

/// Rotate a normalized point a quarter turn clockwise about the square's center,
/// `turns` times.
///
/// Corners cycle bottom-left, top-left, top-right, bottom-right and edge
/// midpoints cycle bottom, left, top, right.
pub fn rotate_quarter(point: Vec2, turns: u8) -> Vec2 {
    (0..turns % 4).fold(point, |p, _| Vec2::new(p.y, 1.0 - p.x))
}

/// Reflect a quad across the vertical and/or horizontal midline, keeping its
/// winding.
pub fn mirror_quad(quad: [Vec2; 4], mirror_x: bool, mirror_y: bool) -> [Vec2; 4] {
    let mut mirrored = quad.map(|p| {
        Vec2::new(
            if mirror_x { 1.0 - p.x } else { p.x },
            if mirror_y { 1.0 - p.y } else { p.y },
        )
    });
    if mirror_x != mirror_y {
        mirrored.reverse();
    }
    mirrored
}

/// Point where a ray from the square's center along `dir` leaves the square.
pub fn boundary_point(dir: Vec2) -> Vec2 {
    let reach = dir.abs().max_element();
    if reach <= f32::EPSILON {
        return Vec2::splat(0.5);
    }
    let mut point = Vec2::splat(0.5) + dir * (0.5 / reach);
    // Snap the exited side so round-off never leaves the square.
    if dir.x.abs() >= dir.y.abs() {
        point.x = if dir.x > 0.0 { 1.0 } else { 0.0 };
    } else {
        point.y = if dir.y > 0.0 { 1.0 } else { 0.0 };
    }
    point
}

/// A convex polygon cut along the midlines of the unit square.
#[derive(Clone, Debug, PartialEq)]
pub struct Division {
    parts: Vec<Vec<Vec2>>,
    split_x: bool,
    /// Per bottom/top part: whether its boundary walk started right of the
    /// vertical midline.
    pub reversed_x: [bool; 2],
    /// Whether the source boundary walk started above the horizontal midline.
    pub reversed_y: bool,
}

impl Division {
    /// Parts in canonical order: bottom-left, bottom-right, top-left, top-right,
    /// with unsplit axes collapsed.
    pub fn parts(&self) -> &[Vec<Vec2>] {
        &self.parts
    }

    /// The part lying inside `region`. May hold fewer than three vertices.
    pub fn part(&self, region: &Region) -> &[Vec2] {
        let xi = region.x.map_or(0, |h| h.index());
        let yi = region.y.map_or(0, |h| h.index());
        let columns = if self.split_x { 2 } else { 1 };
        &self.parts[yi * columns + xi]
    }
}

/// Split a convex polygon at `x = 0.5` and/or `y = 0.5`.
///
/// The y split runs first, then each half is split on x. A polygon that lies
/// wholly on one side of a midline produces one full and one empty part.
/// Crossing points are inserted where edges cross a midline.
pub fn divide_polygon(points: &[Vec2], split_x: bool, split_y: bool) -> Division {
    let (rows, reversed_y) = if split_y {
        let (halves, reversed) = split_half(points, 1);
        (Vec::from(halves), reversed)
    } else {
        (vec![points.to_vec()], false)
    };

    let mut reversed_x = [false; 2];
    let parts = if split_x {
        let mut parts = Vec::with_capacity(4);
        for (row, reversed) in rows.iter().zip(reversed_x.iter_mut()) {
            let (halves, row_reversed) = split_half(row, 0);
            *reversed = row_reversed;
            parts.extend(halves);
        }
        parts
    } else {
        rows
    };

    Division {
        parts,
        split_x,
        reversed_x,
        reversed_y,
    }
}

/// Clip against one midline, returning `[low, high]` and whether the walk
/// started in the high half.
fn split_half(points: &[Vec2], axis: usize) -> ([Vec<Vec2>; 2], bool) {
    let offset = |p: Vec2| p[axis] - 0.5;

    if points.iter().all(|&p| offset(p) >= 0.0) {
        return ([Vec::new(), points.to_vec()], false);
    }
    if points.iter().all(|&p| offset(p) <= 0.0) {
        return ([points.to_vec(), Vec::new()], false);
    }

    let n = points.len();
    let mut low = Vec::with_capacity(n + 2);
    let mut high = Vec::with_capacity(n + 2);
    for i in 0..n {
        let cur = points[i];
        let next = points[(i + 1) % n];
        let (c, d) = (offset(cur), offset(next));

        if c <= 0.0 {
            low.push(cur);
        }
        if c >= 0.0 {
            high.push(cur);
        }
        if c * d < 0.0 {
            let mut crossing = cur.lerp(next, c / (c - d));
            crossing[axis] = 0.5;
            low.push(crossing);
            high.push(crossing);
        }
    }

    ([low, high], offset(points[0]) > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Partition;
    use proptest::prelude::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_lerp_f32() {
        assert_eq!(lerp_f32(0.0, 100.0, 0.0), 0.0);
        assert_eq!(lerp_f32(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp_f32(0.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn test_divide_unit_square_into_quadrants() {
        let division = divide_polygon(&unit_square(), true, true);

        assert_eq!(division.parts().len(), 4);
        for part in division.parts() {
            assert_eq!(part.len(), 4);
            assert!((polygon_area(part) - 0.25).abs() < 1e-6);
        }
        let total: f32 = division.parts().iter().map(|p| polygon_area(p)).sum();
        assert!((total - 1.0).abs() < 1e-6);

        let top_right = &division.parts()[3];
        assert!(top_right.iter().all(|p| p.x >= 0.5 && p.y >= 0.5));
        assert!(top_right.contains(&Vec2::new(1.0, 1.0)));
        assert!(!division.reversed_y);
    }

    #[test]
    fn test_divide_one_sided_polygon() {
        let right = vec![
            Vec2::new(0.6, 0.1),
            Vec2::new(0.6, 0.9),
            Vec2::new(0.9, 0.9),
        ];
        let division = divide_polygon(&right, true, false);

        assert!(division.parts()[0].is_empty());
        assert_eq!(division.parts()[1], right);
    }

    #[test]
    fn test_divide_reports_reversed_start() {
        let square_from_top = vec![
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
        ];
        let division = divide_polygon(&square_from_top, false, true);

        assert!(division.reversed_y);
        assert!((polygon_area(&division.parts()[0]) - 0.5).abs() < 1e-6);
        assert!(division.parts()[0].iter().all(|p| p.y <= 0.5));
    }

    #[test]
    fn test_part_lookup_by_region() {
        let division = divide_polygon(&unit_square(), true, true);
        let real = Partition::TopLeft.real_region();
        let part = division.part(&real);
        assert!(part.iter().all(|p| p.x <= 0.5 && p.y >= 0.5));
    }

    #[test]
    fn test_rotate_quarter_cycles_corners() {
        assert_eq!(rotate_quarter(Vec2::new(0.0, 0.0), 1), Vec2::new(0.0, 1.0));
        assert_eq!(rotate_quarter(Vec2::new(0.0, 0.0), 2), Vec2::new(1.0, 1.0));
        assert_eq!(rotate_quarter(Vec2::new(0.0, 0.0), 3), Vec2::new(1.0, 0.0));
        assert_eq!(rotate_quarter(Vec2::new(0.5, 0.0), 1), Vec2::new(0.0, 0.5));
        assert_eq!(rotate_quarter(Vec2::new(0.3, 0.2), 4), Vec2::new(0.3, 0.2));
    }

    #[test]
    fn test_mirror_quad_keeps_winding() {
        let quad = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 1.0),
            Vec2::new(0.5, 0.0),
        ];
        let signed = |q: &[Vec2; 4]| -> f32 { (0..4).map(|i| q[i].perp_dot(q[(i + 1) % 4])).sum() };

        let mirrored = mirror_quad(quad, true, false);
        assert!(mirrored.iter().all(|p| p.x >= 0.5));
        assert_eq!(signed(&mirrored).signum(), signed(&quad).signum());
    }

    #[test]
    fn test_boundary_point() {
        assert_eq!(boundary_point(Vec2::new(0.0, -1.0)), Vec2::new(0.5, 0.0));
        assert_eq!(boundary_point(Vec2::new(2.0, 1.0)), Vec2::new(1.0, 0.75));
        assert_eq!(boundary_point(Vec2::new(-1.0, 1.0)), Vec2::new(0.0, 1.0));
    }

    proptest! {
        #[test]
        fn prop_division_preserves_area(
            x0 in 0.0f32..1.0, y0 in 0.0f32..1.0,
            x1 in 0.0f32..1.0, y1 in 0.0f32..1.0,
            split_x in any::<bool>(), split_y in any::<bool>(),
        ) {
            let (min, max) = (Vec2::new(x0.min(x1), y0.min(y1)), Vec2::new(x0.max(x1), y0.max(y1)));
            let rect = vec![min, Vec2::new(min.x, max.y), max, Vec2::new(max.x, min.y)];

            let division = divide_polygon(&rect, split_x, split_y);
            let expected = 1 << (split_x as usize + split_y as usize);
            prop_assert_eq!(division.parts().len(), expected);

            let total: f32 = division.parts().iter().map(|p| polygon_area(p)).sum();
            prop_assert!((total - polygon_area(&rect)).abs() < 1e-5);
        }
    }
}
