//! Core data structures for prmap
//!
//! This crate provides the types shared by the autotiler and the converter:
//! - `Direction` - Neighbour/collision direction flags
//! - `Tile` / `TileGrid` - Resolved sheet tiles and row-major layers of them
//! - `SpriteSheet` / `SpriteSet` / `Catalog` - Static sheet and style reference data
//! - `TiledMap` - The Tiled JSON export, with GID resolution
//! - `ObjectGid` - Flip/rotate flags packed into object GIDs
//! - Collision direction lookup for the collision sheet

mod catalog;
pub mod collision;
mod direction;
mod error;
pub mod gid;
pub mod map;
mod sheet;
mod tile;

pub use catalog::Catalog;
pub use collision::{
    collision_direction, collision_direction_at, collision_directions, COLLISION_SHEET_ID,
};
pub use direction::{Direction, ParseDirectionError};
pub use error::ResolveError;
pub use gid::ObjectGid;
pub use map::{LayerKind, MapLayer, MapObject, MapTileset, ObjectProperties, TiledMap};
pub use sheet::{SpriteSet, SpriteSetTile, SpriteSheet};
pub use tile::{Tile, TileGrid};
