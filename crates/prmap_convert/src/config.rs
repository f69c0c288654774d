//! Converter configuration loaded from `prmap.toml`
//!
//! Every field has a default, so an absent file and an empty file behave the
//! same.

use crate::ConvertError;
use prmap_core::map::{COLLISIONS_LAYER, DOODADS_LAYER, GROUND_LAYER, NPCS_LAYER};
use prmap_core::{LayerKind, COLLISION_SHEET_ID};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "prmap.toml";

/// Layer names the converter gives special treatment (exact, case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerNames {
    pub ground: String,
    pub doodads: String,
    pub npcs: String,
    pub collisions: String,
}

impl Default for LayerNames {
    fn default() -> Self {
        Self {
            ground: GROUND_LAYER.to_string(),
            doodads: DOODADS_LAYER.to_string(),
            npcs: NPCS_LAYER.to_string(),
            collisions: COLLISIONS_LAYER.to_string(),
        }
    }
}

impl LayerNames {
    /// Classify a layer by name
    pub fn classify(&self, name: &str) -> LayerKind {
        if name == self.ground {
            LayerKind::Ground
        } else if name == self.doodads {
            LayerKind::Doodads
        } else if name == self.npcs {
            LayerKind::Npcs
        } else if name == self.collisions {
            LayerKind::Collisions
        } else {
            LayerKind::Other
        }
    }
}

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Sheet whose tiles carry collision directions
    pub collision_sheet: String,
    /// Extension of the written file, without the dot
    pub output_extension: String,
    /// Indent the output JSON
    pub pretty: bool,
    /// Process layers on the rayon thread pool
    pub parallel: bool,
    pub layers: LayerNames,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            collision_sheet: COLLISION_SHEET_ID.to_string(),
            output_extension: "prmap".to_string(),
            pretty: true,
            parallel: true,
            layers: LayerNames::default(),
        }
    }
}

impl ConvertConfig {
    /// Parse a TOML config
    pub fn from_toml_str(contents: &str) -> Result<Self, ConvertError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let contents = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load `path` if given, else `prmap.toml` from the working directory if present,
    /// else the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConvertError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    tracing::debug!("Using config from {}", default_path.display());
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
