use serde::Deserialize;

/// A height band: vertices strictly above `min_height` take `color`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct TerrainBand {
    pub min_height: f32,
    pub color: [f32; 4],
}

/// Four bands checked from highest to lowest: snow, rock, vegetation, water.
/// Heights that fall below every band (including NaN) take the last one.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct ColorBands {
    pub bands: [TerrainBand; 4],
}

impl Default for ColorBands {
    fn default() -> Self {
        Self {
            bands: [
                // Snow
                TerrainBand {
                    min_height: 1.5,
                    color: [1., 1., 1., 1.],
                },
                // Rock
                TerrainBand {
                    min_height: 0.75,
                    color: [0.22, 0., 0., 1.],
                },
                // Vegetation
                TerrainBand {
                    min_height: 0.,
                    color: [0.1, 0.45, 0.1, 1.],
                },
                // Water
                TerrainBand {
                    min_height: f32::NEG_INFINITY,
                    color: [0., 0., 0.33, 1.],
                },
            ],
        }
    }
}

impl ColorBands {
    pub fn color_for(&self, height: f32) -> [f32; 4] {
        let lowest = self.bands[self.bands.len() - 1];

        self.bands
            .iter()
            .find(|band| height > band.min_height)
            .unwrap_or(&lowest)
            .color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let bands = ColorBands::default();

        assert_eq!(bands.color_for(4.), [1., 1., 1., 1.]);
        assert_eq!(bands.color_for(1.5), [0.22, 0., 0., 1.]);
        assert_eq!(bands.color_for(0.75), [0.1, 0.45, 0.1, 1.]);
        assert_eq!(bands.color_for(0.01), [0.1, 0.45, 0.1, 1.]);
        assert_eq!(bands.color_for(0.), [0., 0., 0.33, 1.]);
        assert_eq!(bands.color_for(-3.), [0., 0., 0.33, 1.]);
    }

    #[test]
    fn test_nan_is_water() {
        assert_eq!(ColorBands::default().color_for(f32::NAN), [0., 0., 0.33, 1.]);
    }

    #[test]
    fn test_bands_from_ron() {
        let bands: ColorBands = ron::from_str(
            "(bands: (
                (min_height: 10.0, color: (1.0, 1.0, 1.0, 1.0)),
                (min_height: 5.0, color: (0.5, 0.5, 0.5, 1.0)),
                (min_height: 1.0, color: (0.0, 1.0, 0.0, 1.0)),
                (min_height: -1000.0, color: (0.0, 0.0, 1.0, 1.0)),
            ))",
        )
        .unwrap();

        assert_eq!(bands.color_for(7.), [0.5, 0.5, 0.5, 1.]);
        assert_eq!(bands.color_for(0.5), [0., 0., 1., 1.]);
    }
}
