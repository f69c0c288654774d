//! Loading catalogs, Tiled maps and the load manifest from disk
//!
//! # Load manifest
//!
//! When no paths are given on the command line the converter reads
//! `load.txt`: the first line is the catalog path, the second the map path.
//! Relative paths are taken relative to the manifest's directory.
//!
//! ```text
//! data/catalog.json
//! maps/town.json
//! ```

use crate::ConvertError;
use prmap_core::{Catalog, TiledMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest looked up in the working directory when no paths are given
pub const DEFAULT_MANIFEST: &str = "load.txt";

/// The catalog and map a conversion runs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadManifest {
    pub catalog: PathBuf,
    pub map: PathBuf,
}

impl LoadManifest {
    pub fn new(catalog: impl Into<PathBuf>, map: impl Into<PathBuf>) -> Self {
        Self {
            catalog: catalog.into(),
            map: map.into(),
        }
    }

    /// Parse manifest contents, resolving relative paths against `base_dir`
    pub fn parse(contents: &str, base_dir: &Path) -> Result<Self, ConvertError> {
        let mut lines = strip_bom(contents)
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty());

        let catalog = lines
            .next()
            .ok_or_else(|| ConvertError::InvalidManifest("missing catalog path".to_string()))?;
        let map = lines
            .next()
            .ok_or_else(|| ConvertError::InvalidManifest("missing map path".to_string()))?;

        Ok(Self::new(base_dir.join(catalog), base_dir.join(map)))
    }

    /// Read a manifest file. A missing file is an error, not a no-op.
    pub fn read(path: &Path) -> Result<Self, ConvertError> {
        if !path.is_file() {
            return Err(ConvertError::ManifestNotFound(path.to_path_buf()));
        }
        let contents = read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&contents, base_dir)
    }
}

fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{feff}').unwrap_or(s)
}

fn read_to_string(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a catalog from a JSON string
pub fn load_catalog_from_str(json: &str) -> Result<Catalog, ConvertError> {
    Ok(serde_json::from_str(strip_bom(json))?)
}

/// Load a catalog from a JSON file
pub fn load_catalog(path: &Path) -> Result<Catalog, ConvertError> {
    let catalog = load_catalog_from_str(&read_to_string(path)?)?;
    tracing::debug!(
        "Loaded catalog {}: {} sheets, {} sprite sets",
        path.display(),
        catalog.sheets.len(),
        catalog.sets.len()
    );
    Ok(catalog)
}

/// Load a Tiled map from a JSON string
pub fn load_map_from_str(json: &str) -> Result<TiledMap, ConvertError> {
    Ok(serde_json::from_str(strip_bom(json))?)
}

/// Load a Tiled map from a JSON file
pub fn load_map(path: &Path) -> Result<TiledMap, ConvertError> {
    let map = load_map_from_str(&read_to_string(path)?)?;
    tracing::debug!(
        "Loaded map {}: {}x{}, {} layers",
        path.display(),
        map.width,
        map.height,
        map.layers.len()
    );
    Ok(map)
}

/// Output path next to the map: same directory and stem, new extension
pub fn output_path_for(map_path: &Path, extension: &str) -> PathBuf {
    map_path.with_extension(extension)
}
