use std::{fs, io, path::Path};

use bevy::log::{info, warn};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::{
    generation::{diamond_square_terrain, CornerSeeds, DiamondSquare},
    meshing::{heightmap_to_grid_mesh_with_bands, ColorBands, GridExtent, TerrainMeshData},
    HeightField, TerrainError, MAX_EXPONENT,
};

/// Everything needed to produce a terrain mesh, usually read from a RON file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainSettings {
    /// Grid exponent `n`; the field is `2^n + 1` samples wide.
    pub exponent: u32,
    pub roughness: f32,
    /// Fixed seed for reproducible terrain. `None` draws from the thread rng.
    pub seed: Option<u64>,
    pub corners: CornerSeeds,
    pub extent: GridExtent,
    pub bands: ColorBands,
    /// Vertical exaggeration applied by the viewer.
    pub height_scale: f32,
    pub wireframe: bool,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            exponent: 6,
            roughness: 0.02,
            seed: None,
            corners: CornerSeeds::default(),
            extent: GridExtent {
                min_x: -8.,
                max_x: 8.,
                min_y: -8.,
                max_y: 8.,
            },
            bands: ColorBands::default(),
            height_scale: 4.,
            wireframe: true,
        }
    }
}

impl TerrainSettings {
    pub fn from_ron(text: &str) -> Result<Self, TerrainError> {
        let settings: Self = ron::from_str(text)
            .map_err(|e| TerrainError::Settings(format!("failed to parse terrain settings ron: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from `path`, falling back to the defaults when the file
    /// does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TerrainError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(text) => {
                info!("loading terrain settings from {}", path.display());
                Self::from_ron(&text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("{} not found, using default terrain settings", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(TerrainError::Settings(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        if !(1..=MAX_EXPONENT).contains(&self.exponent) {
            return Err(TerrainError::InvalidExponent {
                got: self.exponent,
                max: MAX_EXPONENT,
            });
        }
        self.diamond_square().validate()
    }

    pub fn diamond_square(&self) -> DiamondSquare {
        DiamondSquare {
            roughness: self.roughness,
            corners: self.corners,
        }
    }

    pub fn generate_field(&self) -> Result<HeightField, TerrainError> {
        self.validate()?;

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };

        diamond_square_terrain(self.exponent, &self.diamond_square(), &mut *rng)
    }

    pub fn build_mesh(&self) -> Result<TerrainMeshData, TerrainError> {
        let field = self.generate_field()?;
        Ok(heightmap_to_grid_mesh_with_bands(&field, self.extent, &self.bands))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let settings = TerrainSettings::from_ron("(exponent: 3, seed: Some(9))").unwrap();

        assert_eq!(settings.exponent, 3);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.roughness, TerrainSettings::default().roughness);
        assert_eq!(settings.bands, ColorBands::default());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        assert_eq!(
            TerrainSettings::from_ron("(roughness: 2.0)").unwrap_err(),
            TerrainError::InvalidRoughness(2.)
        );
        assert!(matches!(
            TerrainSettings::from_ron("(exponent: 0)"),
            Err(TerrainError::InvalidExponent { got: 0, .. })
        ));
        assert!(matches!(
            TerrainSettings::from_ron("(exponent: \"big\")"),
            Err(TerrainError::Settings(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = TerrainSettings::load("does/not/exist/terrain.ron").unwrap();
        assert_eq!(settings, TerrainSettings::default());
    }

    #[test]
    fn test_seeded_mesh_is_reproducible() {
        let settings = TerrainSettings {
            exponent: 3,
            seed: Some(11),
            ..Default::default()
        };

        let a = settings.build_mesh().unwrap();
        let b = settings.build_mesh().unwrap();

        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.triangle_count, 2 * 9 * 9);
    }

    #[test]
    fn test_unseeded_generation() {
        let settings = TerrainSettings {
            exponent: 2,
            ..Default::default()
        };
        let field = settings.generate_field().unwrap();

        assert_eq!(field.get(0, 0), Some(settings.corners.top_left));
        assert!(field.as_slice().iter().all(|h| h.is_finite()));
    }
}
