//! Tiled JSON map export and GID resolution
//!
//! Only the fields the converter reads are modelled; everything else in the
//! export is ignored on load.

use crate::{Catalog, ResolveError, Tile, TileGrid};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the autotiled ground layer
pub const GROUND_LAYER: &str = "ground";
/// Name of the autotiled doodads layer
pub const DOODADS_LAYER: &str = "doodads";
/// Name of the NPC object layer
pub const NPCS_LAYER: &str = "npcs";
/// Name of the collision layer
pub const COLLISIONS_LAYER: &str = "collisions";

/// What the converter does with a layer, picked by exact, case-sensitive name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Ground,
    Doodads,
    Npcs,
    Collisions,
    Other,
}

/// A contiguous GID range mapped onto one sheet image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapTileset {
    #[serde(rename = "firstgid")]
    pub first_gid: u32,
    #[serde(rename = "imagewidth", default)]
    pub image_width: u32,
    #[serde(rename = "imageheight", default)]
    pub image_height: u32,
    #[serde(rename = "tilecount", default)]
    pub tile_count: u32,
    pub name: String,
}

impl MapTileset {
    /// Check if `gid` falls in `[first_gid, first_gid + tile_count)`
    pub fn contains_gid(&self, gid: u32) -> bool {
        gid >= self.first_gid && gid - self.first_gid < self.tile_count
    }

    /// Number of tile columns for a given tile width
    pub fn columns(&self, tile_width: u32) -> u32 {
        if tile_width == 0 {
            0
        } else {
            self.image_width / tile_width
        }
    }
}

/// A single custom property in Tiled's array form
#[derive(Debug, Clone, Deserialize)]
struct PropertyEntry {
    name: String,
    #[serde(default)]
    value: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawProperties {
    Map(HashMap<String, serde_json::Value>),
    List(Vec<PropertyEntry>),
}

impl From<RawProperties> for ObjectProperties {
    fn from(raw: RawProperties) -> Self {
        let values = match raw {
            RawProperties::Map(values) => values,
            RawProperties::List(entries) => {
                entries.into_iter().map(|e| (e.name, e.value)).collect()
            }
        };
        ObjectProperties { values }
    }
}

/// String-keyed property bag on a placed object.
///
/// Accepts both the legacy `{"id": "bob"}` form and the
/// `[{"name": "id", "value": "bob"}]` form newer Tiled versions write.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawProperties")]
pub struct ObjectProperties {
    pub values: HashMap<String, serde_json::Value>,
}

impl Serialize for ObjectProperties {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl ObjectProperties {
    /// Get a property rendered as a string (numbers and booleans are formatted)
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }
}

/// An object placed on an object layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapObject {
    /// GID with flip/rotate flags in bits 29-31
    #[serde(default)]
    pub gid: u32,
    /// Pixel position
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub properties: ObjectProperties,
}

impl MapObject {
    pub fn new(gid: u32, x: f64, y: f64) -> Self {
        Self {
            gid,
            x,
            y,
            properties: ObjectProperties::default(),
        }
    }

    /// Set a property
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key, value);
        self
    }
}

/// A tile or object layer of the export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLayer {
    pub name: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Row-major GIDs, 0 = empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<MapObject>>,
}

impl MapLayer {
    /// Create a tile layer
    pub fn new_tile_layer(name: impl Into<String>, width: u32, height: u32, data: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            data: Some(data),
            objects: None,
        }
    }

    /// Create an object layer
    pub fn new_object_layer(name: impl Into<String>, objects: Vec<MapObject>) -> Self {
        Self {
            name: name.into(),
            width: 0,
            height: 0,
            data: None,
            objects: Some(objects),
        }
    }
}

/// A Tiled map export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiledMap {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    #[serde(default)]
    pub tilesets: Vec<MapTileset>,
    #[serde(default)]
    pub layers: Vec<MapLayer>,
}

impl TiledMap {
    /// First tileset whose range contains `gid`
    pub fn tileset_for_gid(&self, gid: u32) -> Option<&MapTileset> {
        self.tilesets.iter().find(|t| t.contains_gid(gid))
    }

    /// Resolve a GID (flags already stripped, never 0) into a catalog tile
    pub fn tile_from_gid(&self, gid: u32, catalog: &Catalog) -> Result<Tile, ResolveError> {
        let tileset = self
            .tileset_for_gid(gid)
            .ok_or(ResolveError::TilesetNotFound { gid })?;

        let columns = tileset.columns(self.tile_width);
        if columns == 0 {
            return Err(ResolveError::InvalidTileset {
                name: tileset.name.clone(),
                image_width: tileset.image_width,
                tile_width: self.tile_width,
            });
        }

        let sheet = catalog
            .sheet_by_name(&tileset.name)
            .ok_or_else(|| ResolveError::SheetNotFound {
                name: tileset.name.clone(),
            })?;

        let local = gid - tileset.first_gid;
        Ok(Tile::new(sheet.id.clone(), local % columns, local / columns))
    }

    /// Resolve every cell of a tile layer. GID 0 becomes an empty cell.
    ///
    /// Layers without `data` resolve to an all-empty grid of the layer's size.
    pub fn resolve_layer(&self, layer: &MapLayer, catalog: &Catalog) -> Result<TileGrid, ResolveError> {
        let too_large = || ResolveError::LayerTooLarge {
            layer: layer.name.clone(),
            width: layer.width,
            height: layer.height,
        };

        let Some(data) = &layer.data else {
            return TileGrid::new(layer.width, layer.height).ok_or_else(too_large);
        };

        let expected = TileGrid::cell_count(layer.width, layer.height).ok_or_else(too_large)?;
        if data.len() != expected {
            return Err(ResolveError::LayerSizeMismatch {
                layer: layer.name.clone(),
                expected,
                actual: data.len(),
            });
        }

        let cells = data
            .iter()
            .map(|&gid| match gid {
                0 => Ok(None),
                gid => self.tile_from_gid(gid, catalog).map(Some),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TileGrid {
            width: layer.width,
            height: layer.height,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpriteSheet;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                SpriteSheet::new("ground", "sheets/ground.png", "nature"),
                SpriteSheet::new("floors", "floors.png", "indoor"),
            ],
            Vec::new(),
        )
    }

    fn map() -> TiledMap {
        TiledMap {
            width: 2,
            height: 2,
            tile_width: 16,
            tile_height: 16,
            tilesets: vec![
                MapTileset {
                    first_gid: 1,
                    image_width: 128,
                    image_height: 64,
                    tile_count: 32,
                    name: "ground".to_string(),
                },
                MapTileset {
                    first_gid: 33,
                    image_width: 64,
                    image_height: 64,
                    tile_count: 16,
                    name: "floors".to_string(),
                },
            ],
            layers: Vec::new(),
        }
    }

    #[test]
    fn test_gid_to_local_coordinates() {
        let map = map();
        let catalog = catalog();

        assert_eq!(map.tile_from_gid(1, &catalog), Ok(Tile::new("ground", 0, 0)));
        assert_eq!(map.tile_from_gid(10, &catalog), Ok(Tile::new("ground", 1, 1)));
        assert_eq!(map.tile_from_gid(32, &catalog), Ok(Tile::new("ground", 7, 3)));
        assert_eq!(map.tile_from_gid(33, &catalog), Ok(Tile::new("floors", 0, 0)));
        assert_eq!(map.tile_from_gid(38, &catalog), Ok(Tile::new("floors", 1, 1)));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let map = map();
        let catalog = catalog();
        for gid in 1..49 {
            assert_eq!(map.tile_from_gid(gid, &catalog), map.tile_from_gid(gid, &catalog));
            assert!(map.tile_from_gid(gid, &catalog).is_ok());
        }
    }

    #[test]
    fn test_gid_outside_every_tileset() {
        let map = map();
        assert_eq!(
            map.tile_from_gid(49, &catalog()),
            Err(ResolveError::TilesetNotFound { gid: 49 })
        );
        assert_eq!(
            map.tile_from_gid(0, &catalog()),
            Err(ResolveError::TilesetNotFound { gid: 0 })
        );
    }

    #[test]
    fn test_tileset_without_sheet() {
        let mut map = map();
        map.tilesets[1].name = "lava".to_string();
        assert_eq!(
            map.tile_from_gid(33, &catalog()),
            Err(ResolveError::SheetNotFound { name: "lava".to_string() })
        );
    }

    #[test]
    fn test_tileset_narrower_than_a_tile() {
        let mut map = map();
        map.tilesets[0].image_width = 8;
        assert!(matches!(
            map.tile_from_gid(1, &catalog()),
            Err(ResolveError::InvalidTileset { .. })
        ));
    }

    #[test]
    fn test_resolve_layer_keeps_empty_cells() {
        let map = map();
        let layer = MapLayer::new_tile_layer("ground", 2, 2, vec![0, 1, 33, 0]);
        let grid = map.resolve_layer(&layer, &catalog()).unwrap();
        assert_eq!(
            grid.cells,
            vec![None, Some(Tile::new("ground", 0, 0)), Some(Tile::new("floors", 0, 0)), None]
        );
    }

    #[test]
    fn test_resolve_layer_size_mismatch() {
        let map = map();
        let layer = MapLayer::new_tile_layer("ground", 2, 2, vec![1, 1, 1]);
        assert_eq!(
            map.resolve_layer(&layer, &catalog()),
            Err(ResolveError::LayerSizeMismatch {
                layer: "ground".to_string(),
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_resolve_layer_with_oversized_dimensions() {
        let map = map();
        // products that overflow u32; reported as an error, never wrapped
        for (width, height) in [(65536, 65537), (u32::MAX, u32::MAX)] {
            let layer = MapLayer::new_tile_layer("ground", width, height, vec![0]);
            match map.resolve_layer(&layer, &catalog()) {
                Err(ResolveError::LayerSizeMismatch { expected, actual, .. }) => {
                    assert_eq!(Some(expected), (width as usize).checked_mul(height as usize));
                    assert_eq!(actual, 1);
                }
                Err(ResolveError::LayerTooLarge { layer, .. }) => assert_eq!(layer, "ground"),
                other => panic!("expected a size error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_object_properties_both_forms() {
        let legacy: MapObject =
            serde_json::from_str(r#"{"gid": 5, "x": 32, "y": 48, "properties": {"id": "merchant"}}"#)
                .unwrap();
        assert_eq!(legacy.properties.get_string("id").as_deref(), Some("merchant"));

        let listed: MapObject = serde_json::from_str(
            r#"{"gid": 5, "x": 32.0, "y": 48.0,
                "properties": [{"name": "id", "type": "int", "value": 7}]}"#,
        )
        .unwrap();
        assert_eq!(listed.properties.get_string("id").as_deref(), Some("7"));
        assert_eq!(listed.properties.get_string("missing"), None);
    }

    #[test]
    fn test_tiled_json_field_names() {
        let json = r#"{
            "width": 3, "height": 1, "tilewidth": 16, "tileheight": 16,
            "orientation": "orthogonal",
            "tilesets": [{"firstgid": 1, "imagewidth": 64, "imageheight": 64,
                          "tilecount": 16, "name": "ground", "image": "ground.png"}],
            "layers": [
                {"name": "ground", "width": 3, "height": 1, "data": [1, 0, 2], "type": "tilelayer"},
                {"name": "npcs", "objects": [{"gid": 2147483650, "x": 16, "y": 0}], "type": "objectgroup"}
            ]
        }"#;
        let map: TiledMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.tilesets[0].tile_count, 16);
        assert_eq!(map.layers[0].data.as_deref(), Some(&[1, 0, 2][..]));
        let objects = map.layers[1].objects.as_ref().unwrap();
        assert_eq!(objects[0].gid, 0x8000_0002);
    }
}
