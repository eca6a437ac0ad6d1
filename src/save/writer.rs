use brickadia::save::{Brick, BrickColor, Collision, Color, Direction, Rotation, SaveData, Size};
use brickadia::write::SaveWriter;

use crate::brick::BrickRecord;
use crate::error::{ConvertError, Result};
use crate::geometry;
use crate::save::SaveContainer;

/// Serialize an assembled container into the binary save format.
///
/// The backend never sees a malformed catalog (assembly checks that), but
/// its failures still surface as serialization errors rather than panics.
pub fn write_save(container: &SaveContainer) -> Result<Vec<u8>> {
    let mut data = SaveData::default();
    data.header1.description = container.header.description.clone();
    data.header1.save_time = container.header.save_time;
    data.header2.brick_assets = container.header.brick_assets.clone();
    data.header2.materials = container.header.materials.clone();

    data.bricks.reserve(container.bricks.len());
    for record in &container.bricks {
        data.bricks.push(to_save_brick(record)?);
    }

    let mut buffer = Vec::new();
    SaveWriter::new(&mut buffer, data)
        .write()
        .map_err(|e| ConvertError::Serialization(e.to_string()))?;
    Ok(buffer)
}

fn to_save_brick(record: &BrickRecord) -> Result<Brick> {
    let (x, y, z) = record.position;

    Ok(Brick {
        asset_name_index: record.asset_name_index,
        size: Size::Procedural(record.size.x, record.size.y, record.size.z),
        position: (narrow(x, "x")?, narrow(y, "y")?, narrow(z, "z")?),
        direction: match record.direction {
            geometry::Direction::Vertical => Direction::YPositive,
            geometry::Direction::Horizontal => Direction::ZPositive,
        },
        rotation: Rotation::Deg0,
        collision: Collision {
            player: record.collision,
            weapon: record.collision,
            interaction: record.collision,
            tool: record.collision,
        },
        visibility: record.visibility,
        material_index: record.material_index,
        // Truncation, not rounding: a linear channel of 254.999... stores
        // 254, matching saves produced by earlier versions of the tool.
        color: BrickColor::Unique(Color {
            r: record.color.r as u8,
            g: record.color.g as u8,
            b: record.color.b as u8,
            a: record.color.a,
        }),
        ..Default::default()
    })
}

fn narrow(value: i64, axis: &'static str) -> Result<i32> {
    i32::try_from(value).map_err(|_| ConvertError::EncodingOverflow { axis, value })
}
