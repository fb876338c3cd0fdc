use crate::primitives::Rect;
use glam::Vec2;

/// Which half or quadrant of the destination holds the real sprite content.
///
/// The rest of the rectangle is reconstructed by reflecting that region
/// across the vertical midline, the horizontal midline, or both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Partition {
    TopHalf,
    BottomHalf,
    RightHalf,
    #[default]
    LeftHalf,
    TopRight,
    BottomRight,
    TopLeft,
    BottomLeft,
}

/// One of the two halves of an axis split at its midline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Half {
    /// Left on the x axis, bottom on the y axis.
    Low,
    /// Right on the x axis, top on the y axis.
    High,
}

impl Half {
    /// Half containing a normalized coordinate. The midline belongs to `Low`.
    pub fn of(coord: f32) -> Half {
        if coord > 0.5 {
            Half::High
        } else {
            Half::Low
        }
    }

    /// Normalized extent `(start, end)` of this half.
    pub fn range(self) -> (f32, f32) {
        match self {
            Half::Low => (0.0, 0.5),
            Half::High => (0.5, 1.0),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Half::Low => 0,
            Half::High => 1,
        }
    }

    pub fn opposite(self) -> Half {
        match self {
            Half::Low => Half::High,
            Half::High => Half::Low,
        }
    }
}

/// The mirror axes of a partition: `Some(real half)` on each axis the
/// partition splits, `None` on axes drawn whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MirrorAxes {
    pub x: Option<Half>,
    pub y: Option<Half>,
}

impl MirrorAxes {
    /// Real half on `axis` (0 for x, 1 for y).
    pub fn get(&self, axis: usize) -> Option<Half> {
        match axis {
            0 => self.x,
            _ => self.y,
        }
    }
}

impl Partition {
    pub const ALL: [Partition; 8] = [
        Partition::TopHalf,
        Partition::BottomHalf,
        Partition::RightHalf,
        Partition::LeftHalf,
        Partition::TopRight,
        Partition::BottomRight,
        Partition::TopLeft,
        Partition::BottomLeft,
    ];

    pub const fn axes(self) -> MirrorAxes {
        use Half::*;
        let (x, y) = match self {
            Partition::TopHalf => (None, Some(High)),
            Partition::BottomHalf => (None, Some(Low)),
            Partition::RightHalf => (Some(High), None),
            Partition::LeftHalf => (Some(Low), None),
            Partition::TopRight => (Some(High), Some(High)),
            Partition::BottomRight => (Some(High), Some(Low)),
            Partition::TopLeft => (Some(Low), Some(High)),
            Partition::BottomLeft => (Some(Low), Some(Low)),
        };
        MirrorAxes { x, y }
    }

    pub fn splits_x(self) -> bool {
        self.axes().x.is_some()
    }

    pub fn splits_y(self) -> bool {
        self.axes().y.is_some()
    }

    /// How many times the real region repeats across the destination, per axis.
    pub fn repeat(self) -> Vec2 {
        Vec2::new(
            if self.splits_x() { 2.0 } else { 1.0 },
            if self.splits_y() { 2.0 } else { 1.0 },
        )
    }

    /// The region holding the real, unreflected content.
    pub fn real_region(self) -> Region {
        let axes = self.axes();
        Region::new(axes, axes.x, axes.y)
    }

    /// Every region of the destination, the real one first.
    ///
    /// Half partitions have two regions, quadrant partitions four.
    pub fn regions(self) -> Vec<Region> {
        let axes = self.axes();
        let halves = |real: Option<Half>| match real {
            Some(half) => vec![Some(half), Some(half.opposite())],
            None => vec![None],
        };

        let mut regions = Vec::with_capacity(4);
        for y in halves(axes.y) {
            for x in halves(axes.x) {
                regions.push(Region::new(axes, x, y));
            }
        }
        regions
    }

    /// The region a normalized point falls into.
    pub fn locate(self, point: Vec2) -> Region {
        let axes = self.axes();
        Region::new(
            axes,
            axes.x.map(|_| Half::of(point.x)),
            axes.y.map(|_| Half::of(point.y)),
        )
    }
}

/// A half or quadrant of the destination, and how its UVs relate to the
/// real content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: Option<Half>,
    pub y: Option<Half>,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Region {
    fn new(axes: MirrorAxes, x: Option<Half>, y: Option<Half>) -> Self {
        Self {
            x,
            y,
            flip_x: axes.x.is_some() && axes.x != x,
            flip_y: axes.y.is_some() && axes.y != y,
        }
    }

    pub fn is_mirrored(&self) -> bool {
        self.flip_x || self.flip_y
    }

    /// Bounds of this region in normalized space.
    pub fn bounds(&self) -> Rect {
        let (x0, x1) = self.x.map_or((0.0, 1.0), Half::range);
        let (y0, y1) = self.y.map_or((0.0, 1.0), Half::range);
        Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Texture coordinate of a normalized point inside this region.
    ///
    /// The region's bounds map onto the whole of `uv`; flipped axes are
    /// reflected so mirrored regions sample the real content backwards.
    pub fn map_uv(&self, point: Vec2, uv: Rect) -> Vec2 {
        let bounds = self.bounds();
        let t = (point - bounds.min) / bounds.size();
        let mut mapped = uv.lerp(t);
        if self.flip_x {
            mapped.x = uv.mirror_x(mapped.x);
        }
        if self.flip_y {
            mapped.y = uv.mirror_y(mapped.y);
        }
        mapped
    }
}
