use crate::HeightFieldError;

/// An immutable 2D grid of elevation samples.
///
/// A field of `size` quads per axis stores `(size + 1) x (size + 1)`
/// samples, row-major with `x` varying fastest. Samples are raw
/// elevations; vertical scaling and world placement belong to the
/// consumer.
#[derive(Clone, Debug)]
pub struct HeightField {
    size: u32,
    samples: Vec<f32>,
}

impl HeightField {
    /// Build a field from a raw sample vector.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `samples.len()` is not
    /// `(size + 1)^2`.
    pub fn from_samples(size: u32, samples: Vec<f32>) -> Result<Self, HeightFieldError> {
        let per_axis = size as usize + 1;
        let expected = per_axis * per_axis;
        if samples.len() != expected {
            return Err(HeightFieldError::DimensionMismatch {
                size,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { size, samples })
    }

    /// Build a field by evaluating `f(x, z)` at every sample coordinate.
    pub fn from_fn(size: u32, mut f: impl FnMut(u32, u32) -> f32) -> Self {
        let per_axis = size + 1;
        let mut samples = Vec::with_capacity(per_axis as usize * per_axis as usize);
        for z in 0..per_axis {
            for x in 0..per_axis {
                samples.push(f(x, z));
            }
        }
        Self { size, samples }
    }

    /// Number of quads per axis.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of samples per axis (`size + 1`).
    pub fn samples_per_axis(&self) -> u32 {
        self.size + 1
    }

    /// Elevation at a sample coordinate, or `None` outside the grid.
    pub fn get(&self, x: u32, z: u32) -> Option<f32> {
        let per_axis = self.samples_per_axis();
        if x >= per_axis || z >= per_axis {
            return None;
        }
        Some(self.samples[(z * per_axis + x) as usize])
    }

    /// Elevation at a sample coordinate.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the coordinate lies outside the grid.
    pub fn sample(&self, x: u32, z: u32) -> Result<f32, HeightFieldError> {
        self.get(x, z).ok_or(HeightFieldError::OutOfRange {
            x,
            z,
            samples_per_axis: self.samples_per_axis(),
        })
    }

    /// Minimum and maximum elevation over the inclusive sample rectangle
    /// `[x0, x1] x [z0, z1]`, visiting every `stride`-th sample on each
    /// axis. Both rectangle corners are always visited when `stride`
    /// divides the rectangle extent.
    ///
    /// # Errors
    ///
    /// Returns `ZeroStride` for a zero stride and `OutOfRange` if either
    /// corner lies outside the grid.
    pub fn min_max(
        &self,
        x0: u32,
        z0: u32,
        x1: u32,
        z1: u32,
        stride: u32,
    ) -> Result<(f32, f32), HeightFieldError> {
        if stride == 0 {
            return Err(HeightFieldError::ZeroStride);
        }
        let per_axis = self.samples_per_axis();
        if x1 >= per_axis || z1 >= per_axis || x0 > x1 || z0 > z1 {
            return Err(HeightFieldError::OutOfRange {
                x: x1,
                z: z1,
                samples_per_axis: per_axis,
            });
        }

        let mut min = f32::MAX;
        let mut max = f32::MIN;
        let mut z = z0;
        while z <= z1 {
            let row = (z * per_axis) as usize;
            let mut x = x0;
            while x <= x1 {
                let h = self.samples[row + x as usize];
                min = min.min(h);
                max = max.max(h);
                x += stride;
            }
            z += stride;
        }
        Ok((min, max))
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}
