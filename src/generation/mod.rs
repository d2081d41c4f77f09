use bevy::log::{debug, info};
use rand::Rng;
use serde::Deserialize;

use super::heightmap::HeightField;
use crate::TerrainError;

/// Fixed heights written into the four corners before subdivision.
///
/// `top` is row `y = 0`, `left` is column `x = 0`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CornerSeeds {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl Default for CornerSeeds {
    fn default() -> Self {
        Self {
            top_left: 2.,
            top_right: 3.,
            bottom_left: 4.,
            bottom_right: 2.,
        }
    }
}

impl CornerSeeds {
    fn apply(&self, field: &mut HeightField) -> Result<(), TerrainError> {
        let max = field.max() as isize;

        field.set(0, 0, self.top_left)?;
        field.set(max, 0, self.top_right)?;
        field.set(0, max, self.bottom_left)?;
        field.set(max, max, self.bottom_right)
    }
}

/// Diamond-square subdivision parameters.
#[derive(Clone, Copy, Debug)]
pub struct DiamondSquare {
    /// 0 gives a smooth surface, 1 an extremely rough one.
    pub roughness: f32,
    pub corners: CornerSeeds,
}

impl Default for DiamondSquare {
    fn default() -> Self {
        Self {
            roughness: 0.02,
            corners: CornerSeeds::default(),
        }
    }
}

impl DiamondSquare {
    pub fn new(roughness: f32) -> Result<Self, TerrainError> {
        let settings = Self {
            roughness,
            ..Default::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        if !(0.0..=1.0).contains(&self.roughness) {
            return Err(TerrainError::InvalidRoughness(self.roughness));
        }
        Ok(())
    }

    /// Seeds the corners of `field` and fills the rest of it.
    ///
    /// Returns the number of subdivision levels performed, which is the
    /// field's exponent.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        field: &mut HeightField,
        rng: &mut R,
    ) -> Result<usize, TerrainError> {
        self.validate()?;
        self.corners.apply(field)?;

        let max = field.max() as isize;
        let mut step = max;
        let mut levels = 0;

        // Each level only reads values written by earlier levels or by the
        // square pass of the same level, so halving the step in a loop is
        // equivalent to recursing.
        while step / 2 >= 1 {
            let mid = step / 2;
            let scale = self.roughness * step as f32;

            debug!("diamond-square level {levels}: step {step}, scale {scale}");

            for y in (mid..max).step_by(step as usize) {
                for x in (mid..max).step_by(step as usize) {
                    let offset = random_offset(rng, scale);
                    square(field, x, y, mid, offset)?;
                }
            }

            for y in (0..=max).step_by(mid as usize) {
                for x in ((y + mid) % step..=max).step_by(step as usize) {
                    let offset = random_offset(rng, scale);
                    diamond(field, x, y, mid, offset)?;
                }
            }

            step = mid;
            levels += 1;
        }

        let size = field.size();
        let (min_height, max_height) = field.height_range();
        info!("generated {size}x{size} terrain in {levels} levels, heights {min_height}..{max_height}");

        Ok(levels)
    }
}

/// Allocates a `2^exponent + 1` field and runs diamond-square over it.
pub fn diamond_square_terrain<R: Rng + ?Sized>(
    exponent: u32,
    settings: &DiamondSquare,
    rng: &mut R,
) -> Result<HeightField, TerrainError> {
    settings.validate()?;

    let mut field = HeightField::new(exponent)?;
    settings.generate(&mut field, rng)?;

    Ok(field)
}

fn random_offset<R: Rng + ?Sized>(rng: &mut R, scale: f32) -> f32 {
    rng.random::<f32>() * 2. * scale - scale
}

/// Arithmetic mean, or `None` when there is nothing to average.
pub fn average(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f32>() / values.len() as f32)
}

fn set_average(
    field: &mut HeightField,
    x: isize,
    y: isize,
    neighbours: [(isize, isize); 4],
    offset: f32,
) -> Result<(), TerrainError> {
    let mut samples = [0.; 4];
    let mut count = 0;

    // Off-grid neighbours are left out of the mean
    for (nx, ny) in neighbours {
        if let Some(height) = field.get(nx, ny) {
            samples[count] = height;
            count += 1;
        }
    }

    let avg = average(&samples[..count]).ok_or(TerrainError::NoSamples { x, y })?;
    field.set(x, y, avg + offset)
}

fn square(
    field: &mut HeightField,
    x: isize,
    y: isize,
    mid: isize,
    offset: f32,
) -> Result<(), TerrainError> {
    set_average(
        field,
        x,
        y,
        [
            (x - mid, y - mid),
            (x + mid, y + mid),
            (x + mid, y - mid),
            (x - mid, y + mid),
        ],
        offset,
    )
}

fn diamond(
    field: &mut HeightField,
    x: isize,
    y: isize,
    mid: isize,
    offset: f32,
) -> Result<(), TerrainError> {
    set_average(
        field,
        x,
        y,
        [(x, y - mid), (x + mid, y), (x, y + mid), (x - mid, y)],
        offset,
    )
}
