//! Sprite sheets and the sprite sets grouped on them

use crate::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An image grid of tiles sharing a style tag and mixing policy
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SpriteSheet {
    pub id: String,
    /// Path to the sheet image, as written by the catalog author
    pub file: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub style: String,
    /// Whether sprite sets of other sheets with the same style blend into this one
    #[serde(default)]
    pub mix_with_own_style: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_sheet_id: Option<String>,
    /// Neighbour mask -> style variant name. Sheets without it never autotile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_set_by_direction: Option<HashMap<Direction, String>>,
}

impl SpriteSheet {
    pub fn new(id: impl Into<String>, file: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file: file.into(),
            style: style.into(),
            ..Default::default()
        }
    }

    /// Set whether this sheet mixes with sheets of the same style
    pub fn with_mixing(mut self, mix_with_own_style: bool) -> Self {
        self.mix_with_own_style = mix_with_own_style;
        self
    }

    /// Set the direction-to-style table
    pub fn with_style_table(mut self, table: HashMap<Direction, String>) -> Self {
        self.style_set_by_direction = Some(table);
        self
    }

    /// File name without directory or extension; this is what map tilesets refer to.
    ///
    /// Both `/` and `\` count as separators since catalogs are authored on either platform.
    pub fn name(&self) -> &str {
        let file_name = self
            .file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file.as_str());
        match file_name.rfind('.') {
            Some(0) | None => file_name,
            Some(dot) => &file_name[..dot],
        }
    }

    /// Style variant name authored for a neighbour mask
    pub fn style_for(&self, directions: Direction) -> Option<&str> {
        self.style_set_by_direction
            .as_ref()?
            .get(&directions)
            .map(String::as_str)
    }

    pub fn has_style_table(&self) -> bool {
        self.style_set_by_direction.is_some()
    }
}

/// A named tile location within a sprite set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpriteSetTile {
    /// Style variant name, e.g. `full`, `tl`, `tlr`
    pub id: String,
    pub x: u32,
    pub y: u32,
}

impl SpriteSetTile {
    pub fn new(id: impl Into<String>, x: u32, y: u32) -> Self {
        Self { id: id.into(), x, y }
    }
}

/// Style variants of one semantic tile on a single sheet
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SpriteSet {
    pub id: String,
    pub sheet_id: String,
    #[serde(default)]
    pub tile_locations: Vec<SpriteSetTile>,
    /// The variant painted in source maps to mean "pick the right one for me"
    #[serde(default)]
    pub represent_set_id: String,
}

impl SpriteSet {
    pub fn new(
        id: impl Into<String>,
        sheet_id: impl Into<String>,
        represent_set_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sheet_id: sheet_id.into(),
            tile_locations: Vec::new(),
            represent_set_id: represent_set_id.into(),
        }
    }

    /// Add a named tile location
    pub fn with_tile(mut self, style: impl Into<String>, x: u32, y: u32) -> Self {
        self.tile_locations.push(SpriteSetTile::new(style, x, y));
        self
    }

    /// Tile location for a style variant
    pub fn tile_for_style(&self, style: &str) -> Option<&SpriteSetTile> {
        self.tile_locations.iter().find(|t| t.id == style)
    }

    /// First tile location at a coordinate
    pub fn tile_at(&self, x: u32, y: u32) -> Option<&SpriteSetTile> {
        self.tile_locations.iter().find(|t| t.x == x && t.y == y)
    }

    pub fn contains_coords(&self, x: u32, y: u32) -> bool {
        self.tile_at(x, y).is_some()
    }

    /// Check whether a coordinate is where the representative variant is painted.
    ///
    /// Uses the style of the first location at `(x, y)`, so a representative declared
    /// at a coordinate shared with an earlier entry never matches.
    pub fn is_representative_at(&self, x: u32, y: u32) -> bool {
        self.tile_at(x, y)
            .map(|t| t.id == self.represent_set_id)
            .unwrap_or(false)
    }
}
