use std::path::Path;

use image::RgbaImage;

use crate::error::Result;

/// One decoded pixel, carrying its own grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Decode an image file into an 8-bit RGBA raster.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)?;
    Ok(image.to_rgba8())
}

/// Collect the pixels that will become bricks, in scan order: outer loop
/// over columns, inner loop over rows. Fully transparent pixels are dropped
/// here and never reach the brick builder.
pub fn visible_pixels(image: &RgbaImage) -> Vec<Pixel> {
    let mut pixels = Vec::new();
    for x in 0..image.width() {
        for y in 0..image.height() {
            let [r, g, b, a] = image.get_pixel(x, y).0;
            if a > 0 {
                pixels.push(Pixel { x, y, r, g, b, a });
            }
        }
    }
    pixels
}
