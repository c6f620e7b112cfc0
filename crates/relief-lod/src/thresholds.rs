//! Screen-size threshold table for LOD switching.

use crate::LodError;

/// Per-level screen-size thresholds, stored squared.
///
/// `threshold(i)` is the minimum projected screen radius at which LOD
/// `i` is still used. The sequence is seeded by the LOD 0 screen size
/// and decreases geometrically: the first step divides by the LOD 0
/// distribution factor, every later step by the LOD X factor.
#[derive(Clone, Debug)]
pub struct LodThresholds {
    squared: Vec<f32>,
}

impl LodThresholds {
    /// Build a table of `lod_count` thresholds.
    ///
    /// # Errors
    ///
    /// Returns `LodError::Configuration` when `lod_count` is zero, the
    /// screen size is not positive and finite, or either distribution
    /// factor is not greater than 1 (the sequence must strictly
    /// decrease).
    pub fn build(
        lod_count: u32,
        lod0_screen_size: f32,
        lod0_distribution: f32,
        lodx_distribution: f32,
    ) -> Result<Self, LodError> {
        if lod_count == 0 {
            return Err(LodError::Configuration {
                reason: "at least one LOD level is required",
            });
        }
        if !(lod0_screen_size > 0.0) || !lod0_screen_size.is_finite() {
            return Err(LodError::Configuration {
                reason: "LOD 0 screen size must be positive and finite",
            });
        }
        if !(lod0_distribution > 1.0) || !(lodx_distribution > 1.0) {
            return Err(LodError::Configuration {
                reason: "distribution factors must be greater than 1",
            });
        }

        let mut squared = Vec::with_capacity(lod_count as usize);
        let mut screen_size = lod0_screen_size;
        for lod in 0..lod_count {
            squared.push(screen_size * screen_size);
            let divider = if lod == 0 {
                lod0_distribution
            } else {
                lodx_distribution
            };
            screen_size /= divider;
        }

        Ok(Self { squared })
    }

    /// Number of LOD levels in the table.
    pub fn lod_count(&self) -> u32 {
        self.squared.len() as u32
    }

    /// Squared thresholds, finest level first.
    pub fn squared(&self) -> &[f32] {
        &self.squared
    }
}
