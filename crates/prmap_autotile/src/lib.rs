//! Four-neighbour sprite-set autotiling
//!
//! Cells painted with a sprite set's representative variant are replaced by
//! the variant their sheet authors for the set of cardinal neighbours that are
//! visually compatible with them.
//!
//! # Example
//!
//! ```rust,ignore
//! use prmap_autotile::substitute_layer;
//!
//! let source = map.resolve_layer(layer, &catalog)?;
//! let output = substitute_layer(&source, &catalog)?;
//! ```
//!
//! The source grid is only ever read and the output grid only ever written,
//! so cells can be visited in any order (or in parallel, see
//! [`substitute_layer_par`]) with identical results.

pub mod neighbors;
pub mod style;

mod error;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::StyleError;
pub use neighbors::{compatible_directions, is_compatible, is_compatible_toward};
pub use style::{substitute_cell, substitute_cells, substitute_layer, substitute_layer_par};

// Re-export prmap_core
pub use prmap_core;
