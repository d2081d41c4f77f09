use ndarray::Array2;

use crate::TerrainError;

/// Largest accepted grid exponent. A `2^14 + 1` grid already holds ~270M samples.
pub const MAX_EXPONENT: u32 = 14;

/// Square grid of `2^n + 1` heights stored row-major.
#[derive(Clone, Debug)]
pub struct HeightField {
    exponent: u32,
    heights: Array2<f32>,
}

impl HeightField {
    pub fn new(exponent: u32) -> Result<Self, TerrainError> {
        if !(1..=MAX_EXPONENT).contains(&exponent) {
            return Err(TerrainError::InvalidExponent {
                got: exponent,
                max: MAX_EXPONENT,
            });
        }

        let size = (1usize << exponent) + 1;

        Ok(Self {
            exponent,
            heights: Array2::zeros((size, size)),
        })
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Number of samples along one side.
    pub fn size(&self) -> usize {
        self.heights.dim().0
    }

    /// Largest valid coordinate on either axis.
    pub fn max(&self) -> usize {
        self.size() - 1
    }

    fn index(&self, x: isize, y: isize) -> Option<[usize; 2]> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x <= self.max() && y <= self.max()).then_some([y, x])
    }

    /// Height at column `x`, row `y`, or `None` when off the grid.
    pub fn get(&self, x: isize, y: isize) -> Option<f32> {
        self.index(x, y).map(|idx| self.heights[idx])
    }

    pub fn set(&mut self, x: isize, y: isize, value: f32) -> Result<(), TerrainError> {
        let idx = self.index(x, y).ok_or(TerrainError::OutOfBounds { x, y })?;
        self.heights[idx] = value;
        Ok(())
    }

    /// Flat row-major view, indexed as `row * size + col`.
    pub fn as_slice(&self) -> &[f32] {
        self.heights
            .as_slice()
            .expect("height field is always allocated in standard layout")
    }

    pub fn get_flat(&self, index: usize) -> Option<f32> {
        self.as_slice().get(index).copied()
    }

    pub fn height_range(&self) -> (f32, f32) {
        self.heights
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &h| {
                (min.min(h), max.max(h))
            })
    }
}
