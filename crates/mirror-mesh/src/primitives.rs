use glam::Vec2;

/// Axis-aligned rectangle defined by min and max corners.
///
/// Used both for destination rectangles in local units and for UV rectangles
/// `(u0, v0)..(u1, v1)` in texture space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(Vec2::ZERO, Vec2::ZERO);
    /// The unit square, the normalized space all fill geometry is built in.
    pub const UNIT: Rect = Rect::new(Vec2::ZERO, Vec2::ONE);

    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Map a normalized point (0..1 on both axes) into this rectangle.
    pub fn lerp(&self, t: Vec2) -> Vec2 {
        self.min + self.size() * t
    }

    /// Map a normalized sub-rectangle into this rectangle.
    pub fn sub_rect(&self, normalized: Rect) -> Rect {
        Rect::new(self.lerp(normalized.min), self.lerp(normalized.max))
    }

    /// Reflect an x coordinate across the vertical center line.
    pub fn mirror_x(&self, x: f32) -> f32 {
        self.min.x + self.max.x - x
    }

    /// Reflect a y coordinate across the horizontal center line.
    pub fn mirror_y(&self, y: f32) -> f32 {
        self.min.y + self.max.y - y
    }

    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect::new(self.min + offset, self.max + offset)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Per-side insets in `(left, bottom, right, top)` order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.bottom == 0.0 && self.right == 0.0 && self.top == 0.0
    }

    /// Insets at the low end of each axis, `(left, bottom)`.
    pub fn low(&self) -> Vec2 {
        Vec2::new(self.left, self.bottom)
    }

    /// Insets at the high end of each axis, `(right, top)`.
    pub fn high(&self) -> Vec2 {
        Vec2::new(self.right, self.top)
    }

    pub fn from_low_high(low: Vec2, high: Vec2) -> Self {
        Self::new(low.x, low.y, high.x, high.y)
    }

    pub fn scale(&self, factor: f32) -> Insets {
        Insets::from_low_high(self.low() * factor, self.high() * factor)
    }
}

/// Texture addressing mode outside the `[0, 1]` range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    #[default]
    Repeat,
    Clamp,
    Mirror,
    MirrorOnce,
}

/// Metadata of the sprite a mirror image samples from.
///
/// `size`, `border` and `padding` are in source pixels. `outer_uv` is the
/// sprite footprint in the atlas, `inner_uv` the 9-patch interior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceTexture {
    pub size: Vec2,
    pub outer_uv: Rect,
    pub inner_uv: Rect,
    pub border: Insets,
    pub padding: Insets,
    pub packed: bool,
    pub wrap_mode: WrapMode,
}

impl SourceTexture {
    /// A borderless sprite of `size` pixels covering `outer_uv`.
    pub fn new(size: Vec2, outer_uv: Rect) -> Self {
        Self {
            size,
            outer_uv,
            inner_uv: outer_uv,
            border: Insets::ZERO,
            padding: Insets::ZERO,
            packed: false,
            wrap_mode: WrapMode::Repeat,
        }
    }

    /// Describe a sprite cut from an atlas of `atlas_size` pixels.
    ///
    /// `sprite_rect` is in atlas pixels and `border` in sprite pixels; the
    /// outer and inner UV rectangles are derived from them.
    pub fn from_pixels(atlas_size: Vec2, sprite_rect: Rect, border: Insets) -> Self {
        let to_uv = |p: Vec2| {
            if atlas_size.x > 0.0 && atlas_size.y > 0.0 {
                p / atlas_size
            } else {
                Vec2::ZERO
            }
        };
        let outer_uv = Rect::new(to_uv(sprite_rect.min), to_uv(sprite_rect.max));
        let inner_uv = Rect::new(
            to_uv(sprite_rect.min + border.low()),
            to_uv(sprite_rect.max - border.high()),
        );

        Self {
            inner_uv,
            border,
            ..Self::new(sprite_rect.size(), outer_uv)
        }
    }

    /// Metadata used when no sprite is bound: zero size and degenerate UVs.
    pub fn absent() -> Self {
        Self::new(Vec2::ZERO, Rect::ZERO)
    }

    pub fn with_inner_uv(mut self, inner_uv: Rect) -> Self {
        self.inner_uv = inner_uv;
        self
    }

    pub fn with_border(mut self, border: Insets) -> Self {
        self.border = border;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_packed(mut self, packed: bool) -> Self {
        self.packed = packed;
        self
    }

    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    pub fn has_border(&self) -> bool {
        !self.border.is_zero()
    }

    /// Whether the GPU sampler can repeat this sprite on its own, so tiling
    /// needs only a single quad with scaled UVs.
    pub fn tiles_seamlessly(&self) -> bool {
        !self.has_border() && !self.packed && self.wrap_mode == WrapMode::Repeat
    }

    /// Padding normalized to the sprite size as `(left, bottom)..(1 - right, 1 - top)`.
    ///
    /// Zero-sized sprites have no padding.
    pub fn normalized_padding(&self) -> Rect {
        let w = self.size.x.round();
        let h = self.size.y.round();
        if w <= 0.0 || h <= 0.0 {
            return Rect::UNIT;
        }

        Rect::new(
            Vec2::new(self.padding.left / w, self.padding.bottom / h),
            Vec2::new((w - self.padding.right) / w, (h - self.padding.top) / h),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_mirror_is_reflection() {
        let uv = Rect::new(Vec2::new(0.25, 0.5), Vec2::new(0.75, 1.0));
        assert_eq!(uv.mirror_x(0.25), 0.75);
        assert_eq!(uv.mirror_x(0.5), 0.5);
        assert_eq!(uv.mirror_y(0.75), 0.75);
        assert_eq!(uv.mirror_y(1.0), 0.5);
    }

    #[test]
    fn test_sub_rect_maps_normalized_space() {
        let rect = Rect::from_min_size(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0));
        let right_half = Rect::new(Vec2::new(0.5, 0.0), Vec2::ONE);

        let mapped = rect.sub_rect(right_half);

        assert_eq!(mapped.min, Vec2::new(60.0, 20.0));
        assert_eq!(mapped.max, Vec2::new(110.0, 70.0));
    }

    #[test]
    fn test_from_pixels_derives_uvs() {
        let sprite = SourceTexture::from_pixels(
            Vec2::new(256.0, 128.0),
            Rect::from_min_size(Vec2::new(64.0, 0.0), Vec2::new(64.0, 64.0)),
            Insets::uniform(16.0),
        );

        assert_eq!(sprite.size, Vec2::new(64.0, 64.0));
        assert_eq!(sprite.outer_uv.min, Vec2::new(0.25, 0.0));
        assert_eq!(sprite.outer_uv.max, Vec2::new(0.5, 0.5));
        assert_eq!(sprite.inner_uv.min, Vec2::new(0.3125, 0.125));
        assert_eq!(sprite.inner_uv.max, Vec2::new(0.4375, 0.375));
        assert!(sprite.has_border());
        assert!(!sprite.tiles_seamlessly());
    }

    #[test]
    fn test_normalized_padding() {
        let sprite = SourceTexture::new(Vec2::new(100.0, 50.0), Rect::UNIT)
            .with_padding(Insets::new(10.0, 5.0, 20.0, 0.0));
        let padding = sprite.normalized_padding();

        assert_eq!(padding.min, Vec2::new(0.1, 0.1));
        assert_eq!(padding.max, Vec2::new(0.8, 1.0));
        assert_eq!(SourceTexture::absent().normalized_padding(), Rect::UNIT);
    }
}
