use crate::color::Color;
use crate::error::MeshError;
use crate::partition::Partition;
use crate::primitives::SourceTexture;
use glam::Vec2;

/// Fill amounts below this produce no geometry.
pub const FILL_EMPTY_THRESHOLD: f32 = 0.001;
/// Fill amounts at or above this draw the whole image.
pub const FILL_COMPLETE_THRESHOLD: f32 = 0.999;

/// How the sprite is laid out across the destination rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Stretch the sprite over the rectangle.
    #[default]
    Simple,
    /// 9-patch: corners keep their size, edges and center stretch.
    Sliced,
    /// Repeat the sprite interior, bordered by its 9-patch edges.
    Tiled,
    /// Reveal a fraction of the sprite, see [`FillParams`].
    Filled,
}

/// Shape of the progressive reveal in [`DrawMode::Filled`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillMethod {
    /// Reveal left to right (origin 0) or right to left (origin 1).
    Horizontal,
    /// Reveal bottom to top (origin 0) or top to bottom (origin 1).
    Vertical,
    /// Sweep around a corner: bottom-left, top-left, top-right, bottom-right.
    Radial90,
    /// Sweep around an edge midpoint: bottom, left, top, right.
    Radial180,
    /// Sweep around the center starting at an edge: bottom, right, top, left.
    #[default]
    Radial360,
}

impl FillMethod {
    /// Number of valid fill origins for this method.
    pub const fn origin_count(self) -> u8 {
        match self {
            FillMethod::Horizontal | FillMethod::Vertical => 2,
            FillMethod::Radial90 | FillMethod::Radial180 | FillMethod::Radial360 => 4,
        }
    }
}

/// Progressive reveal settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillParams {
    pub method: FillMethod,
    /// Revealed fraction in `[0, 1]`.
    pub amount: f32,
    /// Where the reveal starts, interpreted per [`FillMethod`].
    pub origin: u8,
    /// Sweep direction for radial methods.
    pub clockwise: bool,
}

impl FillParams {
    /// A full fill of `method` starting at `origin`.
    pub fn new(method: FillMethod, origin: u8) -> Result<Self, MeshError> {
        let params = Self {
            method,
            origin,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Set the revealed fraction, clamped to `[0, 1]`.
    pub fn with_amount(mut self, amount: f32) -> Self {
        self.amount = amount.clamp(0.0, 1.0);
        self
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        let count = self.method.origin_count();
        if self.origin >= count {
            return Err(MeshError::InvalidFillOrigin {
                method: self.method,
                origin: self.origin,
                count,
            });
        }
        if !self.amount.is_finite() {
            return Err(MeshError::NonFiniteFillAmount(self.amount));
        }
        Ok(())
    }

    /// Whether so little is revealed that nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.amount < FILL_EMPTY_THRESHOLD
    }

    /// Whether the fill draws exactly like [`DrawMode::Simple`].
    pub fn is_complete(&self) -> bool {
        self.amount >= FILL_COMPLETE_THRESHOLD
    }
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            method: FillMethod::Radial360,
            amount: 1.0,
            origin: 0,
            clockwise: true,
        }
    }
}

/// A sprite widget that draws a half or quadrant of its texture and mirrors
/// it across the rest of its rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct MirrorImage {
    /// `None` still tessellates, with degenerate UVs.
    pub texture: Option<SourceTexture>,
    pub partition: Partition,
    pub draw_mode: DrawMode,
    pub fill: FillParams,
    pub preserve_aspect: bool,
    /// Draw the center patch in sliced and tiled modes.
    pub fill_center: bool,
    pub tint: Color,
    pub pixels_per_unit: f32,
    /// Anchor used when `preserve_aspect` shrinks the drawing rectangle.
    pub pivot: Vec2,
}

impl MirrorImage {
    pub fn new(texture: SourceTexture) -> Self {
        Self {
            texture: Some(texture),
            ..Self::default()
        }
    }

    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    pub fn with_fill(mut self, fill: FillParams) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_preserve_aspect(mut self, preserve_aspect: bool) -> Self {
        self.preserve_aspect = preserve_aspect;
        self
    }

    pub fn with_fill_center(mut self, fill_center: bool) -> Self {
        self.fill_center = fill_center;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    /// Texture metadata, or the absent placeholder when no sprite is bound.
    pub fn source(&self) -> SourceTexture {
        self.texture.unwrap_or_else(SourceTexture::absent)
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(MeshError::InvalidPixelsPerUnit(self.pixels_per_unit));
        }
        self.fill.validate()
    }

    /// Size that shows the sprite at one texel per pixel, doubled on the
    /// axes the partition mirrors. `None` without a sprite.
    pub fn native_size(&self) -> Option<Vec2> {
        let texture = self.texture.as_ref()?;
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return None;
        }
        Some(texture.size / self.pixels_per_unit * self.partition.repeat())
    }
}

impl Default for MirrorImage {
    fn default() -> Self {
        Self {
            texture: None,
            partition: Partition::default(),
            draw_mode: DrawMode::default(),
            fill: FillParams::default(),
            preserve_aspect: false,
            fill_center: true,
            tint: Color::WHITE,
            pixels_per_unit: 1.0,
            pivot: Vec2::splat(0.5),
        }
    }
}
