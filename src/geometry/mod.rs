use serde::{Deserialize, Serialize};

/// Brick half-extents in game units along X, Y and Z, chosen once per
/// conversion. Adjacent bricks touch exactly when pixels are spaced two
/// half-extents apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickSize {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl BrickSize {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// How the image is projected into the world: standing upright like a mural,
/// or lying flat like a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Vertical,
    Horizontal,
}

impl Direction {
    /// Orientation code the save format stores per brick.
    pub fn orientation_code(self) -> u8 {
        match self {
            Direction::Vertical => 2,   // Y positive
            Direction::Horizontal => 4, // Z positive
        }
    }

    /// Map a pixel's grid coordinate to the center of its brick.
    ///
    /// Each brick is centered on its grid cell (`+ half-extent`), with cells
    /// spaced a full brick apart (`* 2`). In vertical mode the Y half-extent
    /// drives X spacing and the X half-extent drives the world depth axis;
    /// that swap keeps upright bricks undistorted and must stay as-is. The
    /// depth coordinate is negated and offset by the image height so the
    /// image does not come out mirrored top-to-bottom.
    ///
    /// Positions are computed wide; the serializer narrows them to the save
    /// format's integer range.
    pub fn place(self, x: u32, y: u32, size: BrickSize, image_height: u32) -> (i64, i64, i64) {
        let x = i64::from(x);
        let y = i64::from(y);
        let size_x = i64::from(size.x);
        let size_y = i64::from(size.y);
        let size_z = i64::from(size.z);

        match self {
            Direction::Vertical => {
                let new_x = x * size_y * 2 + size_y;
                let new_y = y * size_x * 2 + size_x;
                (new_x, size_z, -new_y + i64::from(image_height) * size_x * 2)
            }
            Direction::Horizontal => {
                let new_x = x * size_x * 2 + size_x;
                let new_y = y * size_y * 2 + size_y;
                (new_x, new_y, size_z)
            }
        }
    }
}
