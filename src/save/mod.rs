pub mod writer;

use crate::brick::BrickRecord;
use crate::error::{ConvertError, Result};

/// Metadata written ahead of the brick data.
#[derive(Debug, Clone)]
pub struct SaveHeader {
    pub description: String,
    /// Save time as fixed-epoch ticks, already little-endian encoded.
    pub save_time: [u8; 8],
    /// Exactly one entry; every brick references it by index 0.
    pub brick_assets: Vec<String>,
    /// Exactly one entry; every brick references it by index 0.
    pub materials: Vec<String>,
}

/// Everything the serializer needs for one save. Built once per job, handed
/// off, discarded.
#[derive(Debug, Clone)]
pub struct SaveContainer {
    pub header: SaveHeader,
    pub bricks: Vec<BrickRecord>,
}

/// Compose header metadata and the mapped bricks into one container.
///
/// Every brick references catalog index 0, so both catalogs must hold
/// exactly one entry. An empty brick list is fine: a fully transparent
/// image produces a valid, empty save.
pub fn assemble(
    description: String,
    save_time: [u8; 8],
    brick_assets: Vec<String>,
    materials: Vec<String>,
    bricks: Vec<BrickRecord>,
) -> Result<SaveContainer> {
    if brick_assets.len() != 1 {
        return Err(ConvertError::InvalidCatalog(format!(
            "expected exactly one brick asset, got {}",
            brick_assets.len()
        )));
    }
    if materials.len() != 1 {
        return Err(ConvertError::InvalidCatalog(format!(
            "expected exactly one material, got {}",
            materials.len()
        )));
    }

    Ok(SaveContainer {
        header: SaveHeader {
            description,
            save_time,
            brick_assets,
            materials,
        },
        bricks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save_time() -> [u8; 8] {
        [0x00, 0x80, 0xB5, 0xF7, 0xF5, 0x7F, 0x9F, 0x08]
    }

    #[test]
    fn test_assemble_accepts_single_entry_catalogs() {
        let container = assemble(
            "a build".to_string(),
            save_time(),
            vec!["PB_DefaultBrick".to_string()],
            vec!["BMC_Plastic".to_string()],
            Vec::new(),
        )
        .unwrap();

        assert_eq!(container.header.description, "a build");
        assert_eq!(container.header.brick_assets, vec!["PB_DefaultBrick"]);
        assert_eq!(container.header.materials, vec!["BMC_Plastic"]);
        assert!(container.bricks.is_empty());
    }

    #[test]
    fn test_assemble_rejects_empty_asset_catalog() {
        let result = assemble(
            String::new(),
            save_time(),
            Vec::new(),
            vec!["BMC_Plastic".to_string()],
            Vec::new(),
        );
        assert!(matches!(result, Err(ConvertError::InvalidCatalog(_))));
    }

    #[test]
    fn test_assemble_rejects_multi_entry_material_catalog() {
        let result = assemble(
            String::new(),
            save_time(),
            vec!["PB_DefaultBrick".to_string()],
            vec!["BMC_Plastic".to_string(), "BMC_Glow".to_string()],
            Vec::new(),
        );
        assert!(matches!(result, Err(ConvertError::InvalidCatalog(_))));
    }
}
