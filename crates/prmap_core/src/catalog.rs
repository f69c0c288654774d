//! The sheet and sprite-set catalog a map is converted against

use crate::{SpriteSet, SpriteSheet, Tile};
use serde::{Deserialize, Serialize};

/// Static reference data: every sheet and sprite set known to the converter.
///
/// Loaded once per conversion and only read afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "SpriteSheets", default)]
    pub sheets: Vec<SpriteSheet>,
    #[serde(rename = "SpriteSets", default)]
    pub sets: Vec<SpriteSet>,
}

impl Catalog {
    pub fn new(sheets: Vec<SpriteSheet>, sets: Vec<SpriteSet>) -> Self {
        Self { sheets, sets }
    }

    /// Get sheet by ID
    pub fn sheet(&self, id: &str) -> Option<&SpriteSheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    /// Get the sheet a tile lives on
    pub fn find_sheet(&self, tile: &Tile) -> Option<&SpriteSheet> {
        self.sheet(&tile.sheet_id)
    }

    /// Get sheet by its file-derived name (what Tiled tilesets are called)
    pub fn sheet_by_name(&self, name: &str) -> Option<&SpriteSheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Get sprite set by ID
    pub fn sprite_set(&self, id: &str) -> Option<&SpriteSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    /// Get the first sprite set on the tile's sheet that has a location at the tile's coordinate
    pub fn find_sprite_set(&self, tile: &Tile) -> Option<&SpriteSet> {
        self.sets
            .iter()
            .find(|set| set.sheet_id == tile.sheet_id && set.contains_coords(tile.x, tile.y))
    }
}
