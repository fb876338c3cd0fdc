use crate::partition::{Half, Partition};
use crate::primitives::{Insets, Rect, SourceTexture};
use glam::Vec2;

/// Rectangle the sprite's visible pixels occupy inside `rect`.
///
/// With `preserve_aspect` the rectangle shrinks on one axis to the aspect of
/// the mirrored sprite, positioned by `pivot`. Transparent padding baked into
/// the sprite is then cut off proportionally.
pub fn drawing_dimensions(
    source: &SourceTexture,
    rect: Rect,
    partition: Partition,
    preserve_aspect: bool,
    pivot: Vec2,
) -> Rect {
    let padding = source.normalized_padding();
    let mut rect = rect;

    if preserve_aspect && source.size.length_squared() > 0.0 {
        let mirrored = source.size * partition.repeat();
        let sprite_ratio = mirrored.x / mirrored.y;
        let rect_ratio = rect.width() / rect.height();

        if sprite_ratio > rect_ratio {
            let height = rect.width() / sprite_ratio;
            let y = rect.min.y + (rect.height() - height) * pivot.y;
            rect = Rect::from_min_size(Vec2::new(rect.min.x, y), Vec2::new(rect.width(), height));
        } else {
            let width = rect.height() * sprite_ratio;
            let x = rect.min.x + (rect.width() - width) * pivot.x;
            rect = Rect::from_min_size(Vec2::new(x, rect.min.y), Vec2::new(width, rect.height()));
        }
    }

    rect.sub_rect(padding)
}

/// Fit 9-patch borders into `rect`.
///
/// On every axis whose insets don't fit, both insets shrink by the same
/// factor. A mirrored axis shows its real border twice, so the fit check
/// uses twice the border on the real side.
pub fn adjusted_borders(border: Insets, rect: Rect, partition: Partition) -> Insets {
    let axes = partition.axes();
    let size = rect.size();
    let mut low = border.low();
    let mut high = border.high();

    for axis in 0..2 {
        let combined = match axes.get(axis) {
            Some(Half::Low) => low[axis] * 2.0,
            Some(Half::High) => high[axis] * 2.0,
            None => low[axis] + high[axis],
        };

        if size[axis] < combined && combined != 0.0 {
            let ratio = size[axis] / combined;
            low[axis] *= ratio;
            high[axis] *= ratio;
        }
    }

    Insets::from_low_high(low, high)
}
