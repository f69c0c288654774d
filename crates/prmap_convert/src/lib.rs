//! Tiled map to `.prmap` conversion
//!
//! Ties the resolver, autotiler and collision deriver together into a whole
//! file conversion:
//!
//! 1. load the sprite catalog and the Tiled JSON export ([`loader`])
//! 2. resolve, autotile and decode every layer ([`convert`])
//! 3. write the assembled [`PrMap`] next to the map ([`output`])
//!
//! # Example
//!
//! ```rust,ignore
//! use prmap_convert::{convert_files, ConvertConfig};
//!
//! let config = ConvertConfig::load_or_default(None)?;
//! let written = convert_files("catalog.json".as_ref(), "town.json".as_ref(), None, &config)?;
//! println!("wrote {}", written.display());
//! ```

pub mod config;
pub mod convert;
pub mod loader;
pub mod output;

mod error;

pub use config::{ConvertConfig, LayerNames, DEFAULT_CONFIG_FILE};
pub use convert::{convert_map, decode_npc, decode_npcs};
pub use error::ConvertError;
pub use loader::{
    load_catalog, load_catalog_from_str, load_map, load_map_from_str, output_path_for,
    LoadManifest, DEFAULT_MANIFEST,
};
pub use output::{Npc, OutputLayer, OutputTile, PrMap};

// Re-export the lower crates
pub use prmap_autotile;
pub use prmap_core;

use std::path::{Path, PathBuf};
use tracing::info;

/// Load a catalog and map from disk, convert, and write the result.
///
/// Writes to `output` when given, otherwise next to the map with the configured
/// extension. Returns the path written.
pub fn convert_files(
    catalog_path: &Path,
    map_path: &Path,
    output: Option<&Path>,
    config: &ConvertConfig,
) -> Result<PathBuf, ConvertError> {
    let catalog = load_catalog(catalog_path)?;
    let map = load_map(map_path)?;
    let prmap = convert_map(&map, &catalog, config)?;

    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output_path_for(map_path, &config.output_extension));
    prmap.write(&out_path, config.pretty)?;

    info!("Wrote {}", out_path.display());
    Ok(out_path)
}
