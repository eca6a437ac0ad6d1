// Common test utilities and helpers
#![allow(dead_code)] // not every test binary uses every helper

use image::{Rgba, RgbaImage};
use img2brs_lib::time::Clock;
use tokio::runtime::Runtime;

/// Clock pinned to one instant so save headers are deterministic.
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_unix_millis(&self) -> i64 {
        self.0
    }
}

/// A width x height image filled with a single RGBA value.
pub fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

/// The red-then-blue 2x1 image used by the layout tests.
pub fn red_blue_image() -> RgbaImage {
    let mut image = solid_image(2, 1, [255, 0, 0, 255]);
    image.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
    image
}

pub fn runtime() -> Runtime {
    Runtime::new().expect("failed to start test runtime")
}
