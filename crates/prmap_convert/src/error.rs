//! Error type for whole-map conversions

use prmap_autotile::StyleError;
use prmap_core::ResolveError;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that aborts a conversion. No partial output is written on error.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Load manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),
    #[error("Invalid load manifest: {0}")]
    InvalidManifest(String),
    #[error("Invalid map format: {0}")]
    InvalidMap(String),
    #[error("Layer '{layer}': {source}")]
    Resolve {
        layer: String,
        #[source]
        source: ResolveError,
    },
    #[error("Layer '{layer}': {source}")]
    Style {
        layer: String,
        #[source]
        source: StyleError,
    },
    #[error("Object {index} on layer '{layer}' has no '{property}' property")]
    MissingObjectProperty {
        layer: String,
        index: usize,
        property: String,
    },
}

impl ConvertError {
    pub(crate) fn resolve(layer: &str, source: ResolveError) -> Self {
        ConvertError::Resolve {
            layer: layer.to_string(),
            source,
        }
    }

    pub(crate) fn style(layer: &str, source: StyleError) -> Self {
        ConvertError::Style {
            layer: layer.to_string(),
            source,
        }
    }
}
