//! Sweep shapes for the radial fill methods, in normalized space.
//!
//! Each shape is built for origin 0 and then turned a quarter at a time into
//! place, so every origin shares one derivation.

use crate::geometry::{boundary_point, mirror_quad, rotate_quarter};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// The eight boundary points of the unit square, counterclockwise from the
/// bottom midpoint.
const OCTAGON: [Vec2; 8] = [
    Vec2::new(0.5, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 0.5),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.5, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, 0.5),
    Vec2::new(0.0, 0.0),
];

const CENTER: Vec2 = Vec2::splat(0.5);

/// Revealed part of a quarter sweep around one corner.
///
/// Origins run bottom-left, top-left, top-right, bottom-right. The quad may
/// repeat a vertex when the cut passes through the far edge.
pub fn quarter_sweep(amount: f32, origin: u8, clockwise: bool) -> [Vec2; 4] {
    let angle = (1.0 - amount) * FRAC_PI_2;
    let mut quad = if amount > 0.5 {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, angle.tan()),
        ]
    } else {
        let reach = 1.0 / angle.tan();
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(reach, 1.0),
            Vec2::new(reach, 1.0),
        ]
    };

    if !clockwise {
        quad = quad.map(|p| Vec2::new(p.y, p.x));
        quad.reverse();
    }
    quad.map(|p| rotate_quarter(p, origin))
}

/// Revealed part of a half sweep around an edge midpoint, as one or two quads.
///
/// Origins run bottom, left, top, right. Past the halfway mark the whole
/// leading half is visible and the sweep continues in a second quad.
pub fn half_sweep(amount: f32, origin: u8, clockwise: bool) -> Vec<[Vec2; 4]> {
    let hidden = 1.0 - amount;
    let angle = hidden * PI;

    let mut quads = if hidden >= 0.5 {
        let tan = (angle - FRAC_PI_2).tan();
        let mut quad = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5 - tan, 1.0),
            Vec2::new(0.5, 0.0),
        ];
        if quad[2].x < 0.0 {
            let edge = Vec2::new(0.0, 0.5 / tan);
            quad[1] = edge;
            quad[2] = edge;
        }
        vec![quad]
    } else {
        let lead = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 1.0),
            Vec2::new(0.5, 0.0),
        ];
        let tan = angle.tan();
        let mut trail = [
            Vec2::new(0.5, 0.0),
            Vec2::new(0.5, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.5 * tan),
        ];
        if trail[3].y > 1.0 {
            let edge = Vec2::new(0.5 + 1.0 / tan, 1.0);
            trail[2] = edge;
            trail[3] = edge;
        }
        vec![trail, lead]
    };

    for quad in &mut quads {
        if !clockwise {
            *quad = mirror_quad(*quad, true, false);
        }
        *quad = quad.map(|p| rotate_quarter(p, origin));
    }
    quads
}

/// Revealed part of a full sweep around the center, as a fan.
///
/// The first point is the center. Origins run bottom, right, top, left. When
/// the sweep ends between two boundary points, the point where it leaves the
/// square follows the center.
pub fn full_sweep(amount: f32, origin: u8, clockwise: bool) -> Vec<Vec2> {
    let hidden = 1.0 - amount;
    let step: i32 = if clockwise { 1 } else { -1 };
    let start = i32::from(origin) * 2;
    let octants = hidden / 0.125;
    let whole = octants.round();

    let mut fan = Vec::with_capacity(10);
    fan.push(CENTER);

    let (first, count) = if (octants - whole).abs() < 1e-4 {
        (start + whole as i32 * step, 9 - whole as i32)
    } else {
        let skipped = octants.floor() as i32;
        let radius = OCTAGON[start as usize] - CENTER;
        let turn = Vec2::from_angle(hidden * TAU * step as f32);
        fan.push(boundary_point(turn.rotate(radius)));
        (start + (skipped + 1) * step, 8 - skipped)
    };

    fan.extend((0..count).map(|i| OCTAGON[(first + i * step).rem_euclid(8) as usize]));
    fan
}
