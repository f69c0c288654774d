//! Shared test catalog
//!
//! - `ground` and `sand`: style "nature", mixing, full 16-entry style tables
//! - `cliffs`: style "rock", not mixing, only "single" and "full" authored
//! - `water`: style "liquid", no style table

use prmap_core::{Catalog, Direction, SpriteSet, SpriteSheet, Tile, TileGrid};
use std::collections::HashMap;

const CARDINALS: [Direction; 4] = [
    Direction::NORTH,
    Direction::SOUTH,
    Direction::WEST,
    Direction::EAST,
];

/// Every combination of the four cardinal flags
pub fn all_cardinal_masks() -> impl Iterator<Item = Direction> {
    (0u8..16).map(Direction::from_bits_truncate)
}

/// Style variant name authored for a mask, e.g. "nse" or "none"
pub fn style_name(directions: Direction) -> String {
    if directions.is_empty() {
        return "none".to_string();
    }
    CARDINALS
        .iter()
        .zip(["n", "s", "w", "e"])
        .filter(|(dir, _)| directions.contains(**dir))
        .map(|(_, letter)| letter)
        .collect()
}

/// Where the variant for a mask sits on the `ground` and `sand` sheets
pub fn variant_coords(directions: Direction) -> (u32, u32) {
    let bits = directions.bits() as u32;
    (bits % 4, 1 + bits / 4)
}

fn full_style_table() -> HashMap<Direction, String> {
    all_cardinal_masks().map(|d| (d, style_name(d))).collect()
}

fn full_sprite_set(id: &str, sheet_id: &str) -> SpriteSet {
    all_cardinal_masks().fold(
        SpriteSet::new(id, sheet_id, "paint").with_tile("paint", 0, 0),
        |set, d| {
            let (x, y) = variant_coords(d);
            set.with_tile(style_name(d), x, y)
        },
    )
}

pub fn catalog() -> Catalog {
    let cliffs_table = HashMap::from([
        (Direction::empty(), "single".to_string()),
        (
            Direction::NORTH | Direction::SOUTH | Direction::WEST | Direction::EAST,
            "full".to_string(),
        ),
    ]);

    Catalog::new(
        vec![
            SpriteSheet::new("ground", "sheets/ground.png", "nature")
                .with_mixing(true)
                .with_style_table(full_style_table()),
            SpriteSheet::new("sand", "sheets/sand.png", "nature")
                .with_mixing(true)
                .with_style_table(full_style_table()),
            SpriteSheet::new("cliffs", "sheets/cliffs.png", "rock").with_style_table(cliffs_table),
            SpriteSheet::new("water", "sheets/water.png", "liquid"),
        ],
        vec![
            full_sprite_set("grass", "ground"),
            full_sprite_set("dune", "sand"),
            SpriteSet::new("rock", "cliffs", "paint")
                .with_tile("paint", 0, 0)
                .with_tile("single", 1, 0),
            SpriteSet::new("stone", "cliffs", "paint")
                .with_tile("paint", 5, 0)
                .with_tile("single", 6, 0)
                .with_tile("full", 7, 0),
            SpriteSet::new("pond", "water", "paint").with_tile("paint", 0, 0),
        ],
    )
}

/// Representative grass
pub fn grass() -> Tile {
    Tile::new("ground", 0, 0)
}

/// A non-representative grass variant
pub fn grass_variant() -> Tile {
    Tile::new("ground", 1, 1)
}

/// Representative sand
pub fn sand() -> Tile {
    Tile::new("sand", 0, 0)
}

/// Representative rock
pub fn rock() -> Tile {
    Tile::new("cliffs", 0, 0)
}

/// Representative stone
pub fn stone() -> Tile {
    Tile::new("cliffs", 5, 0)
}

/// Representative water, on a sheet without a style table
pub fn water() -> Tile {
    Tile::new("water", 0, 0)
}

pub fn grid(width: u32, height: u32, cells: Vec<Option<Tile>>) -> TileGrid {
    TileGrid::from_cells(width, height, cells).expect("fixture grid size")
}
