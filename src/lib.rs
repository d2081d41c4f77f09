//! Diamond-square terrain synthesis and grid meshing.
//!
//! A [`HeightField`] of `2^n + 1` samples is filled by
//! [`generation::DiamondSquare`], then [`meshing::heightmap_to_grid_mesh`]
//! turns it into position, colour, index and normal buffers ready for upload.

mod error;
pub mod generation;
mod heightmap;
pub mod meshing;
pub mod settings;

pub use error::TerrainError;
pub use heightmap::{HeightField, MAX_EXPONENT};
pub use settings::TerrainSettings;
