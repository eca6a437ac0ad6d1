use crate::color::srgb_to_linear;
use crate::geometry::{BrickSize, Direction};
use crate::raster::Pixel;

/// RGB in the linear space the save format stores, plus the untouched alpha
/// channel. Channels stay on the 0-255 scale as f64; the serializer
/// truncates them to bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: u8,
}

/// One brick, ready to be laid into a save container. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct BrickRecord {
    /// Wide center position; narrowed to the save format's range when
    /// serialized.
    pub position: (i64, i64, i64),
    pub size: BrickSize,
    pub color: LinearColor,
    pub direction: Direction,
    /// Index into the single-entry brick asset catalog.
    pub asset_name_index: u32,
    /// Index into the single-entry material catalog.
    pub material_index: u32,
    pub collision: bool,
    pub visibility: bool,
}

/// Build the brick for one visible pixel.
///
/// The caller filters alpha == 0 pixels beforehand; whatever arrives here
/// becomes a brick. Bricks are axis-aligned with no rotation, collide, are
/// visible, and reference index 0 of both single-entry catalogs.
pub fn build_brick(
    pixel: Pixel,
    size: BrickSize,
    direction: Direction,
    image_height: u32,
) -> BrickRecord {
    BrickRecord {
        position: direction.place(pixel.x, pixel.y, size, image_height),
        size,
        color: LinearColor {
            r: srgb_to_linear(pixel.r),
            g: srgb_to_linear(pixel.g),
            b: srgb_to_linear(pixel.b),
            a: pixel.a,
        },
        direction,
        asset_name_index: 0,
        material_index: 0,
        collision: true,
        visibility: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_pixel() -> Pixel {
        Pixel {
            x: 0,
            y: 0,
            r: 255,
            g: 0,
            b: 0,
            a: 255,
        }
    }

    #[test]
    fn test_fixed_flags_and_indices() {
        let brick = build_brick(red_pixel(), BrickSize::new(5, 5, 2), Direction::Vertical, 1);
        assert_eq!(brick.asset_name_index, 0);
        assert_eq!(brick.material_index, 0);
        assert!(brick.collision);
        assert!(brick.visibility);
        assert_eq!(brick.direction.orientation_code(), 2);
    }

    #[test]
    fn test_position_comes_from_the_placement_rule() {
        let size = BrickSize::new(5, 5, 2);
        let brick = build_brick(red_pixel(), size, Direction::Vertical, 1);
        assert_eq!(brick.position, Direction::Vertical.place(0, 0, size, 1));
        assert_eq!(brick.position, (5, 2, 5));
    }

    #[test]
    fn test_color_channels_are_linearized() {
        let brick = build_brick(red_pixel(), BrickSize::new(5, 5, 2), Direction::Vertical, 1);
        assert!((brick.color.r - 255.0).abs() < 1e-6);
        assert_eq!(brick.color.g, 0.0);
        assert_eq!(brick.color.b, 0.0);
    }

    #[test]
    fn test_alpha_passes_through_untouched() {
        let pixel = Pixel {
            x: 0,
            y: 0,
            r: 10,
            g: 20,
            b: 30,
            a: 128,
        };
        let brick = build_brick(pixel, BrickSize::new(5, 5, 2), Direction::Horizontal, 4);
        assert_eq!(brick.color.a, 128);
    }
}
