//! Errors raised while resolving map data against the catalog

use thiserror::Error;

/// Failure to turn a GID or tileset into a catalog tile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("No tileset contains GID {gid}")]
    TilesetNotFound { gid: u32 },
    #[error("No sprite sheet named '{name}' in the catalog")]
    SheetNotFound { name: String },
    #[error("Tileset '{name}' is {image_width}px wide, which holds no {tile_width}px tiles")]
    InvalidTileset {
        name: String,
        image_width: u32,
        tile_width: u32,
    },
    #[error("Layer '{layer}' has {actual} cells, expected {expected}")]
    LayerSizeMismatch {
        layer: String,
        expected: usize,
        actual: usize,
    },
    #[error("Layer '{layer}' is {width}x{height}, too many cells to hold")]
    LayerTooLarge {
        layer: String,
        width: u32,
        height: u32,
    },
}
