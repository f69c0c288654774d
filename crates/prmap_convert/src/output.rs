//! The `.prmap` output layout

use crate::ConvertError;
use prmap_core::{Direction, Tile, TileGrid};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A tile reference in an output layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTile {
    #[serde(rename = "SId")]
    pub sheet_id: String,
    #[serde(rename = "SX")]
    pub x: u32,
    #[serde(rename = "SY")]
    pub y: u32,
}

impl From<&Tile> for OutputTile {
    fn from(tile: &Tile) -> Self {
        Self {
            sheet_id: tile.sheet_id.clone(),
            x: tile.x,
            y: tile.y,
        }
    }
}

/// A named tile layer; `tiles` has exactly `width * height` entries with `None` for empty cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputLayer {
    pub name: String,
    pub tiles: Vec<Option<OutputTile>>,
}

impl OutputLayer {
    pub fn from_grid(name: impl Into<String>, grid: &TileGrid) -> Self {
        Self {
            name: name.into(),
            tiles: grid
                .cells
                .iter()
                .map(|cell| cell.as_ref().map(OutputTile::from))
                .collect(),
        }
    }
}

/// A placed NPC, positioned in grid cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Npc {
    pub id: String,
    pub sheet_tile: Tile,
    pub flipped: bool,
    pub x: i32,
    pub y: i32,
}

/// A converted map, ready to be written as `.prmap` JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrMap {
    pub width: u32,
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Every layer except the NPC and collision layers, in map order
    pub layers: Vec<OutputLayer>,
    /// `None` when the map has no NPC layer
    #[serde(rename = "NPCs")]
    pub npcs: Option<Vec<Npc>>,
    /// Blocked directions per cell of the collision layer, `None` without one
    pub collisions: Option<Vec<Direction>>,
}

impl PrMap {
    pub fn layer(&self, name: &str) -> Option<&OutputLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Serialize to JSON
    pub fn to_json(&self, pretty: bool) -> Result<String, ConvertError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the JSON to `path`
    pub fn write(&self, path: &Path, pretty: bool) -> Result<(), ConvertError> {
        let json = self.to_json(pretty)?;
        fs::write(path, json).map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
