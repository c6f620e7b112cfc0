//! Per-sector LOD selection against a threshold table.

use glam::{Mat4, Vec3};
use relief_math::screen_radius_sq;

use crate::LodThresholds;

/// Selects LOD levels from projected screen sizes.
///
/// Selection scans from the finest level and returns the first whose
/// threshold the projected size still reaches; a size below every
/// threshold selects the coarsest level. The scan is bounded by the
/// table length, allocates nothing, and is idempotent, so it can run
/// for every sector every frame. There is no hysteresis: a size exactly
/// at a boundary can flip between calls when the input flips, and
/// callers needing stability must add it themselves.
pub struct LodSelector {
    thresholds: LodThresholds,
}

impl LodSelector {
    /// Create a selector over the given threshold table.
    pub fn new(thresholds: LodThresholds) -> Self {
        Self { thresholds }
    }

    /// Select a LOD level for a squared projected screen radius.
    pub fn select(&self, screen_radius_sq: f32) -> u8 {
        let squared = self.thresholds.squared();
        for (lod, &threshold_sq) in squared.iter().enumerate() {
            if screen_radius_sq >= threshold_sq {
                return lod as u8;
            }
        }
        (squared.len() - 1) as u8
    }

    /// Select a LOD level for a bounding sphere seen from `view_origin`
    /// through `proj`.
    pub fn select_for_sphere(
        &self,
        center: Vec3,
        radius: f32,
        view_origin: Vec3,
        proj: &Mat4,
    ) -> u8 {
        self.select(screen_radius_sq(radius, center, view_origin, proj))
    }

    /// Access the underlying threshold table.
    pub fn thresholds(&self) -> &LodThresholds {
        &self.thresholds
    }
}
