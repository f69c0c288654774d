//! The conversion pipeline: Tiled map + catalog -> [`PrMap`]
//!
//! Each layer is handled independently according to its name:
//! - ground / doodads: resolved, then autotiled
//! - collisions: resolved, then turned into per-cell collision directions
//! - npcs: objects decoded into [`Npc`] records
//! - anything else: resolved and passed through
//!
//! The first error aborts the whole conversion.

use crate::{ConvertConfig, ConvertError, Npc, OutputLayer, PrMap};
use prmap_autotile::{substitute_layer, substitute_layer_par};
use prmap_core::{
    collision_directions, Catalog, Direction, LayerKind, MapLayer, MapObject, ObjectGid, TiledMap,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Property holding an NPC's identity
pub const NPC_ID_PROPERTY: &str = "id";

/// Result of processing a single layer
#[derive(Debug)]
enum ProcessedLayer {
    Tiles(OutputLayer),
    Npcs(Vec<Npc>),
    Collisions(Vec<Direction>),
}

/// Convert a map against a catalog
pub fn convert_map(
    map: &TiledMap,
    catalog: &Catalog,
    config: &ConvertConfig,
) -> Result<PrMap, ConvertError> {
    if map.tile_width == 0 || map.tile_height == 0 {
        return Err(ConvertError::InvalidMap(format!(
            "tile size {}x{} must be non-zero",
            map.tile_width, map.tile_height
        )));
    }

    info!(
        "Converting {}x{} map with {} layers",
        map.width,
        map.height,
        map.layers.len()
    );

    let processed: Vec<ProcessedLayer> = if config.parallel {
        map.layers
            .par_iter()
            .map(|layer| process_layer(map, catalog, config, layer))
            .collect::<Result<_, _>>()?
    } else {
        map.layers
            .iter()
            .map(|layer| process_layer(map, catalog, config, layer))
            .collect::<Result<_, _>>()?
    };

    let mut layers = Vec::new();
    let mut npcs = None;
    let mut collisions = None;
    for layer in processed {
        match layer {
            ProcessedLayer::Tiles(layer) => layers.push(layer),
            // only the first NPC and collision layers are kept
            ProcessedLayer::Npcs(found) => {
                npcs.get_or_insert(found);
            }
            ProcessedLayer::Collisions(found) => {
                collisions.get_or_insert(found);
            }
        }
    }

    Ok(PrMap {
        width: map.width,
        height: map.height,
        tile_width: map.tile_width,
        tile_height: map.tile_height,
        layers,
        npcs,
        collisions,
    })
}

fn process_layer(
    map: &TiledMap,
    catalog: &Catalog,
    config: &ConvertConfig,
    layer: &MapLayer,
) -> Result<ProcessedLayer, ConvertError> {
    let kind = config.layers.classify(&layer.name);
    debug!("Processing layer '{}' as {:?}", layer.name, kind);

    match kind {
        LayerKind::Ground | LayerKind::Doodads => {
            let source = map
                .resolve_layer(layer, catalog)
                .map_err(|e| ConvertError::resolve(&layer.name, e))?;
            let output = if config.parallel {
                substitute_layer_par(&source, catalog)
            } else {
                substitute_layer(&source, catalog)
            }
            .map_err(|e| ConvertError::style(&layer.name, e))?;

            let changed = source
                .cells
                .iter()
                .zip(&output.cells)
                .filter(|(before, after)| before != after)
                .count();
            debug!("Layer '{}': {} cells autotiled", layer.name, changed);

            Ok(ProcessedLayer::Tiles(OutputLayer::from_grid(&layer.name, &output)))
        }
        LayerKind::Other => {
            warn!("Layer '{}' is not a known layer, copying its tiles unchanged", layer.name);
            let source = map
                .resolve_layer(layer, catalog)
                .map_err(|e| ConvertError::resolve(&layer.name, e))?;
            Ok(ProcessedLayer::Tiles(OutputLayer::from_grid(&layer.name, &source)))
        }
        LayerKind::Collisions => {
            let source = map
                .resolve_layer(layer, catalog)
                .map_err(|e| ConvertError::resolve(&layer.name, e))?;
            Ok(ProcessedLayer::Collisions(collision_directions(
                &source.cells,
                &config.collision_sheet,
            )))
        }
        LayerKind::Npcs => Ok(ProcessedLayer::Npcs(decode_npcs(map, layer, catalog)?)),
    }
}

/// Decode every object on an NPC layer
pub fn decode_npcs(
    map: &TiledMap,
    layer: &MapLayer,
    catalog: &Catalog,
) -> Result<Vec<Npc>, ConvertError> {
    let objects = layer.objects.as_deref().unwrap_or_default();
    let npcs = objects
        .iter()
        .enumerate()
        .map(|(index, object)| decode_npc(map, &layer.name, index, object, catalog))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Layer '{}': {} NPCs", layer.name, npcs.len());
    Ok(npcs)
}

/// Decode one placed object into an NPC
pub fn decode_npc(
    map: &TiledMap,
    layer_name: &str,
    index: usize,
    object: &MapObject,
    catalog: &Catalog,
) -> Result<Npc, ConvertError> {
    let id = object
        .properties
        .get_string(NPC_ID_PROPERTY)
        .ok_or_else(|| ConvertError::MissingObjectProperty {
            layer: layer_name.to_string(),
            index,
            property: NPC_ID_PROPERTY.to_string(),
        })?;

    let gid = ObjectGid::decode(object.gid);
    let sheet_tile = map
        .tile_from_gid(gid.gid, catalog)
        .map_err(|e| ConvertError::resolve(layer_name, e))?;

    let grid_position = |pixels: f64, tile_size: u32| {
        pixel_to_grid(pixels, tile_size).ok_or_else(|| {
            ConvertError::InvalidMap(format!(
                "object {} on layer '{}' at ({}, {}) is off the tile grid",
                index, layer_name, object.x, object.y
            ))
        })
    };

    Ok(Npc {
        id,
        sheet_tile,
        flipped: gid.flip_horizontal,
        x: grid_position(object.x, map.tile_width)?,
        y: grid_position(object.y, map.tile_height)?,
    })
}

/// Integer pixel position divided by tile size, truncating toward zero.
///
/// `None` for a zero tile size or a grid position outside `i32`.
fn pixel_to_grid(pixels: f64, tile_size: u32) -> Option<i32> {
    let grid = (pixels as i64).checked_div(tile_size as i64)?;
    i32::try_from(grid).ok()
}
