//! Per-sector, per-LOD bounding volume construction.

use glam::Vec3;
use relief_heightfield::HeightField;
use relief_math::Aabb;

use crate::{Sector, SectorError};

/// Build the bounding-volume ladder for one sector: one AABB per LOD
/// level, finest first.
///
/// LOD 0 bounds the min/max elevation at full sample density; each
/// coarser level doubles the sampling stride. Coarser sampling can miss
/// extremes, so each level's range is folded into the next to keep the
/// containment invariant: `bounds[l]` is always inside `bounds[l + 1]`.
///
/// Heights are multiplied by `height_scale` before the min/max pass;
/// `world_origin` translates the result, with one world unit per sample.
///
/// # Errors
///
/// Returns `SectorError::HeightField` if the sector's sample rectangle
/// does not fit inside `field`.
pub fn build_bounds(
    sector: &Sector,
    field: &HeightField,
    height_scale: f32,
    world_origin: Vec3,
) -> Result<Vec<Aabb>, SectorError> {
    let (x0, z0) = sector.sample_origin();
    let quads = sector.quad_count;

    let world_min_x = world_origin.x + x0 as f32;
    let world_min_z = world_origin.z + z0 as f32;
    let world_max_x = world_min_x + quads as f32;
    let world_max_z = world_min_z + quads as f32;

    let mut ladder = Vec::with_capacity(sector.lod_count() as usize);
    let mut min_h = f32::MAX;
    let mut max_h = f32::MIN;

    for lod in 0..sector.lod_count() {
        let stride = 1 << lod;
        let (lod_min, lod_max) = field.min_max(x0, z0, x0 + quads, z0 + quads, stride)?;

        // Fold with the finer levels so the range never shrinks.
        min_h = min_h.min(lod_min * height_scale);
        max_h = max_h.max(lod_max * height_scale);

        ladder.push(Aabb::new(
            Vec3::new(world_min_x, world_origin.y + min_h, world_min_z),
            Vec3::new(world_max_x, world_origin.y + max_h, world_max_z),
        ));
    }

    Ok(ladder)
}
