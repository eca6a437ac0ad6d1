// Layout-level checks: pixels through the placement and color rules,
// without going all the way to serialized bytes.
mod common;

use std::collections::HashSet;

use image::Rgba;
use img2brs_lib::brick::build_brick;
use img2brs_lib::color::srgb_to_linear;
use img2brs_lib::geometry::{BrickSize, Direction};
use img2brs_lib::raster::visible_pixels;

use common::{red_blue_image, solid_image};

#[test]
fn two_pixel_vertical_image_lays_out_as_expected() {
    let image = red_blue_image();
    let size = BrickSize::new(5, 5, 2);

    let pixels = visible_pixels(&image);
    assert_eq!(pixels.len(), 2);

    let bricks: Vec<_> = pixels
        .into_iter()
        .map(|p| build_brick(p, size, Direction::Vertical, image.height()))
        .collect();

    assert_eq!(bricks[0].position, (5, 2, 5));
    assert_eq!(bricks[1].position, (15, 2, 5));
    assert!(bricks.iter().all(|b| b.direction.orientation_code() == 2));

    // Red brick carries linearized red, blue brick linearized blue.
    assert!((bricks[0].color.r - srgb_to_linear(255)).abs() < 1e-12);
    assert_eq!(bricks[0].color.b, 0.0);
    assert!((bricks[1].color.b - srgb_to_linear(255)).abs() < 1e-12);
    assert_eq!(bricks[1].color.r, 0.0);
}

#[test]
fn every_visible_pixel_becomes_exactly_one_brick() {
    // Checkerboard alpha: half the pixels visible.
    let mut image = solid_image(4, 4, [80, 90, 100, 255]);
    for x in 0..4 {
        for y in 0..4 {
            if (x + y) % 2 == 1 {
                image.put_pixel(x, y, Rgba([80, 90, 100, 0]));
            }
        }
    }

    let pixels = visible_pixels(&image);
    assert_eq!(pixels.len(), 8);

    let size = BrickSize::new(5, 5, 2);
    let positions: HashSet<_> = pixels
        .iter()
        .map(|&p| build_brick(p, size, Direction::Horizontal, image.height()).position)
        .collect();
    // Injective: no two pixels share a position.
    assert_eq!(positions.len(), 8);
}

#[test]
fn vertical_grid_snapshot() {
    let image = solid_image(3, 2, [200, 200, 200, 255]);
    let size = BrickSize::new(5, 5, 2);

    let lines: Vec<String> = visible_pixels(&image)
        .into_iter()
        .map(|p| {
            let (x, y, z) = Direction::Vertical.place(p.x, p.y, size, image.height());
            format!("({}, {}) -> ({}, {}, {})", p.x, p.y, x, y, z)
        })
        .collect();
    let grid = lines.join("\n");

    insta::assert_snapshot!("vertical_grid", grid);
}
