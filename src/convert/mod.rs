pub mod worker;

use image::RgbaImage;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::brick::{build_brick, BrickRecord};
use crate::error::{ConvertError, Result};
use crate::geometry::{BrickSize, Direction};
use crate::raster::{self, Pixel};
use crate::save::{self, writer};
use crate::time::{encode_save_time, Clock};

/// Brick assets a conversion can reference, as the game names them.
pub const BRICK_ASSETS: [&str; 7] = [
    "PB_DefaultBrick",
    "PB_DefaultTile",
    "PB_DefaultSideWedge",
    "PB_DefaultSideWedgeTile",
    "PB_DefaultWedge",
    "PB_DefaultMicroBrick",
    "PB_DefaultMicroWedge",
];

/// Materials a conversion can reference.
pub const MATERIALS: [&str; 4] = ["BMC_Plastic", "BMC_Glow", "BMC_Metallic", "BMC_Hologram"];

/// Description stamped into saves when the caller supplies none.
pub const DEFAULT_DESCRIPTION: &str = "Generated with img2brs";

/// Pixels handed to one mapping task.
const MAP_CHUNK_PIXELS: usize = 4096;

/// Options for one conversion job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// The single brick asset every brick uses.
    pub asset_name: String,
    /// The single material every brick uses.
    pub material_name: String,
    pub size: BrickSize,
    pub direction: Direction,
    /// Save description; a stock one is used when absent.
    pub description: Option<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            asset_name: BRICK_ASSETS[0].to_string(),
            material_name: MATERIALS[0].to_string(),
            size: BrickSize::new(5, 5, 2),
            direction: Direction::Vertical,
            description: None,
        }
    }
}

impl ConvertOptions {
    /// A zero half-extent collapses the placement grid onto a plane, which
    /// would stack distinct pixels at the same position.
    fn validate(&self) -> Result<()> {
        if self.size.x == 0 || self.size.y == 0 || self.size.z == 0 {
            return Err(ConvertError::InvalidOptions(format!(
                "brick size must be positive on every axis, got {}x{}x{}",
                self.size.x, self.size.y, self.size.z
            )));
        }
        Ok(())
    }
}

/// Convert a decoded raster into a serialized save.
///
/// Every pixel with alpha > 0 becomes one brick; the brick sequence follows
/// the raster scan order (columns outer, rows inner) no matter how the
/// mapping work is split across workers.
pub async fn convert_image<C: Clock>(
    image: &RgbaImage,
    options: &ConvertOptions,
    clock: &C,
) -> Result<Vec<u8>> {
    options.validate()?;

    let pixels = raster::visible_pixels(image);
    info!(
        "mapping {} visible pixels from a {}x{} image",
        pixels.len(),
        image.width(),
        image.height()
    );

    let bricks = map_pixels(pixels, options.size, options.direction, image.height()).await?;

    let description = options
        .description
        .clone()
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let container = save::assemble(
        description,
        encode_save_time(clock),
        vec![options.asset_name.clone()],
        vec![options.material_name.clone()],
        bricks,
    )?;

    let buffer = writer::write_save(&container)?;
    info!(
        "serialized {} bricks into {} bytes",
        container.bricks.len(),
        buffer.len()
    );
    Ok(buffer)
}

/// Map pixels to bricks on blocking worker threads, a chunk per task.
///
/// Chunks are awaited in submission order, so the merged sequence is the
/// scan order regardless of which task finishes first. A task that dies
/// mid-map surfaces as [`ConvertError::TaskFailed`] rather than unwinding
/// the caller, so a worker loop driving this keeps answering requests.
async fn map_pixels(
    pixels: Vec<Pixel>,
    size: BrickSize,
    direction: Direction,
    image_height: u32,
) -> Result<Vec<BrickRecord>> {
    let mut handles = Vec::with_capacity(pixels.len().div_ceil(MAP_CHUNK_PIXELS));
    for chunk in pixels.chunks(MAP_CHUNK_PIXELS) {
        let chunk = chunk.to_vec();
        handles.push(tokio::task::spawn_blocking(move || {
            chunk
                .into_iter()
                .map(|pixel| build_brick(pixel, size, direction, image_height))
                .collect::<Vec<_>>()
        }));
    }
    debug!("split the mapping across {} tasks", handles.len());

    let mut bricks = Vec::with_capacity(pixels.len());
    for handle in handles {
        bricks.extend(handle.await?);
    }
    Ok(bricks)
}

/// Name the artifact a finished conversion is written to: `.brs` appended
/// when missing, `default.brs` when no name was given.
pub fn save_file_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => {
            if name.ends_with(".brs") {
                name.to_string()
            } else {
                format!("{}.brs", name)
            }
        }
        _ => "default.brs".to_string(),
    }
}
