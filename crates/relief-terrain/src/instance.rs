//! A single terrain's sector tables and per-frame LOD state.

use glam::{Mat4, Vec3};
use rayon::prelude::*;
use relief_batch::{DrawBatch, DrawKey, SectorDraw};
use relief_heightfield::HeightField;
use relief_lod::{LodSelector, LodThresholds};
use relief_math::{Aabb, FrustumCuller, screen_radius_sq};
use relief_sector::{Sector, SectorError, build_bounds, partition};

use crate::TerrainError;

/// Mesh and material identifiers used to mint draw keys.
///
/// Sectors at the same LOD level share one mesh, so `lod_meshes` holds
/// one mesh id per level, finest first.
#[derive(Clone, Debug)]
pub struct TerrainMeshSet {
    /// One mesh id per LOD level.
    pub lod_meshes: Vec<u32>,
    /// Material applied to every sector of this terrain.
    pub material_id: u32,
    /// Submesh within each LOD mesh.
    pub submesh_index: u32,
}

/// Everything needed to build a [`TerrainInstance`].
#[derive(Clone, Debug)]
pub struct TerrainDescriptor {
    /// Sections per axis of the partition grid.
    pub num_sections: u32,
    /// Vertical scale applied to raw height samples.
    pub height_scale: f32,
    /// World-space position of the terrain's first sample.
    pub world_origin: Vec3,
    /// Screen size at which LOD 0 is still used.
    pub lod0_screen_size: f32,
    /// Geometric step between LOD 0 and LOD 1 thresholds.
    pub lod0_distribution: f32,
    /// Geometric step between every later pair of thresholds.
    pub lodx_distribution: f32,
    /// Draw-key identifiers for this terrain.
    pub mesh_set: TerrainMeshSet,
}

/// One terrain's immutable sector tables plus its per-frame LOD output.
///
/// Construction is the whole setup phase: an instance only exists fully
/// built, and everything except the active-LOD table is immutable after
/// [`build`](Self::build) returns.
pub struct TerrainInstance {
    sectors: Vec<Sector>,
    /// Bounding-volume ladder per sector, finest LOD first.
    bounds: Vec<Vec<Aabb>>,
    /// Bounding-sphere center/radius per sector, from the coarsest AABB.
    sphere_centers: Vec<Vec3>,
    sphere_radii: Vec<f32>,
    selector: LodSelector,
    mesh_set: TerrainMeshSet,
    lod_count: u32,
    /// Active LOD per sector, overwritten by each update call.
    active_lod: Vec<u8>,
}

impl TerrainInstance {
    /// Build an instance: partition the field, compute the per-sector
    /// bounds ladders and bounding spheres, and build the LOD threshold
    /// table.
    ///
    /// # Errors
    ///
    /// Fails on invalid partition parameters, a mesh set that does not
    /// cover every LOD level, or invalid LOD tuning. On failure nothing
    /// is retained; there is no partially built instance.
    pub fn build(descriptor: &TerrainDescriptor, field: &HeightField) -> Result<Self, TerrainError> {
        let sectors = partition(field.size(), descriptor.num_sections)?;
        let lod_count = sectors[0].lod_count();

        if descriptor.mesh_set.lod_meshes.len() != lod_count as usize {
            return Err(TerrainError::Configuration {
                reason: "mesh set must hold one mesh id per LOD level",
            });
        }

        let mut bounds = Vec::with_capacity(sectors.len());
        let mut sphere_centers = Vec::with_capacity(sectors.len());
        let mut sphere_radii = Vec::with_capacity(sectors.len());
        for sector in &sectors {
            let ladder = build_bounds(
                sector,
                field,
                descriptor.height_scale,
                descriptor.world_origin,
            )?;
            // The coarsest volume contains every finer one; its sphere is
            // a stable LOD metric input across level changes.
            let coarsest = ladder.last().expect("ladder has at least one level");
            sphere_centers.push(coarsest.center());
            sphere_radii.push(coarsest.bounding_radius());
            bounds.push(ladder);
        }

        let thresholds = LodThresholds::build(
            lod_count,
            descriptor.lod0_screen_size,
            descriptor.lod0_distribution,
            descriptor.lodx_distribution,
        )?;

        let sector_count = sectors.len();
        log::info!(
            "built terrain: {sector_count} sectors, {lod_count} LOD levels, \
             {} quads per sector",
            sectors[0].quad_count
        );

        Ok(Self {
            sectors,
            bounds,
            sphere_centers,
            sphere_radii,
            selector: LodSelector::new(thresholds),
            mesh_set: descriptor.mesh_set.clone(),
            lod_count,
            active_lod: vec![(lod_count - 1) as u8; sector_count],
        })
    }

    /// Recompute the active LOD for every sector from the camera state.
    pub fn update_lod(&mut self, view_origin: Vec3, proj: &Mat4) {
        for (i, lod) in self.active_lod.iter_mut().enumerate() {
            *lod = self.selector.select(screen_radius_sq(
                self.sphere_radii[i],
                self.sphere_centers[i],
                view_origin,
                proj,
            ));
        }
    }

    /// Parallel variant of [`update_lod`](Self::update_lod).
    ///
    /// Selection is pure over the immutable tables; each worker writes
    /// only its own output slot.
    pub fn update_lod_parallel(&mut self, view_origin: Vec3, proj: &Mat4) {
        let selector = &self.selector;
        let centers = &self.sphere_centers;
        let radii = &self.sphere_radii;
        self.active_lod
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, lod)| {
                *lod = selector.select(screen_radius_sq(radii[i], centers[i], view_origin, proj));
            });
    }

    /// Frustum-cull sectors at their active LOD and record one draw per
    /// visible sector.
    pub fn emit_draws(&self, view_projection: &Mat4, batch: &mut DrawBatch) {
        let culler = FrustumCuller::new(view_projection);
        for (i, ladder) in self.bounds.iter().enumerate() {
            let lod = self.active_lod[i];
            if !culler.is_visible(&ladder[lod as usize]) {
                continue;
            }
            batch.push(SectorDraw {
                key: DrawKey::new(
                    self.mesh_set.lod_meshes[lod as usize],
                    self.mesh_set.material_id,
                    self.mesh_set.submesh_index,
                ),
                sector: i as u32,
                lod,
            });
        }
    }

    /// Active LOD of one sector.
    ///
    /// # Errors
    ///
    /// Returns `SectorError::OutOfRange` for a bad sector index.
    pub fn lod_for(&self, sector: usize) -> Result<u8, TerrainError> {
        self.active_lod
            .get(sector)
            .copied()
            .ok_or_else(|| self.out_of_range(sector))
    }

    /// Read-only bounds ladder of one sector, finest LOD first. Intended
    /// for presentation layers drawing debug volumes.
    ///
    /// # Errors
    ///
    /// Returns `SectorError::OutOfRange` for a bad sector index.
    pub fn bounding_volumes(&self, sector: usize) -> Result<&[Aabb], TerrainError> {
        self.bounds
            .get(sector)
            .map(Vec::as_slice)
            .ok_or_else(|| self.out_of_range(sector))
    }

    /// The sector table, row-major.
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Active LOD per sector, in sector-table order.
    pub fn active_lods(&self) -> &[u8] {
        &self.active_lod
    }

    /// Number of LOD levels per sector.
    pub fn lod_count(&self) -> u32 {
        self.lod_count
    }

    fn out_of_range(&self, index: usize) -> TerrainError {
        TerrainError::Sector(SectorError::OutOfRange {
            index,
            count: self.sectors.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(num_sections: u32, lod_count: usize) -> TerrainDescriptor {
        TerrainDescriptor {
            num_sections,
            height_scale: 1.0,
            world_origin: Vec3::ZERO,
            lod0_screen_size: 0.5,
            lod0_distribution: 1.25,
            lodx_distribution: 2.8,
            mesh_set: TerrainMeshSet {
                lod_meshes: (100..100 + lod_count as u32).collect(),
                material_id: 7,
                submesh_index: 0,
            },
        }
    }

    fn proj() -> Mat4 {
        Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100_000.0)
    }

    fn rolling_field(size: u32) -> HeightField {
        HeightField::from_fn(size, |x, z| {
            ((x as f32 * 0.13).sin() + (z as f32 * 0.07).cos()) * 20.0
        })
    }

    #[test]
    fn test_build_concrete_scenario() {
        // 512-quad field, 8 sections: 64 sectors of 64 quads, 7 LODs.
        let terrain = TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        assert_eq!(terrain.sectors().len(), 64);
        assert_eq!(terrain.lod_count(), 7);
    }

    #[test]
    fn test_build_rejects_wrong_mesh_set_length() {
        let result = TerrainInstance::build(&descriptor(8, 3), &rolling_field(512));
        assert!(matches!(
            result,
            Err(TerrainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_build_rejects_bad_partition() {
        // 500 is not divisible by 8.
        let result = TerrainInstance::build(&descriptor(8, 7), &rolling_field(500));
        assert!(matches!(result, Err(TerrainError::Sector(_))));
    }

    #[test]
    fn test_update_lod_close_camera_picks_finest_nearby() {
        let mut terrain =
            TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        // Hover just above sector (0, 0).
        terrain.update_lod(Vec3::new(32.0, 30.0, 32.0), &proj());
        assert_eq!(terrain.lod_for(0).unwrap(), 0);
    }

    #[test]
    fn test_update_lod_far_camera_picks_coarsest_everywhere() {
        let mut terrain =
            TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        terrain.update_lod(Vec3::new(256.0, 2_000_000.0, 256.0), &proj());
        let coarsest = (terrain.lod_count() - 1) as u8;
        assert!(terrain.active_lods().iter().all(|&l| l == coarsest));
    }

    #[test]
    fn test_update_lod_is_idempotent() {
        let mut terrain =
            TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        let view = Vec3::new(100.0, 80.0, 300.0);
        terrain.update_lod(view, &proj());
        let first: Vec<u8> = terrain.active_lods().to_vec();
        terrain.update_lod(view, &proj());
        assert_eq!(terrain.active_lods(), first.as_slice());
    }

    #[test]
    fn test_parallel_update_matches_serial() {
        let mut serial =
            TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        let mut parallel =
            TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        let view = Vec3::new(150.0, 60.0, 90.0);
        serial.update_lod(view, &proj());
        parallel.update_lod_parallel(view, &proj());
        assert_eq!(serial.active_lods(), parallel.active_lods());
    }

    #[test]
    fn test_lod_grows_with_sector_distance() {
        let mut terrain =
            TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        terrain.update_lod(Vec3::new(0.0, 30.0, 0.0), &proj());
        // Sector (0, 0) is under the camera; sector (7, 7) is ~630 units
        // away diagonally and must not be finer.
        let near = terrain.lod_for(0).unwrap();
        let far = terrain.lod_for(63).unwrap();
        assert!(
            far >= near,
            "distant sector selected finer LOD: near={near}, far={far}"
        );
        assert!(far > 0, "distant sector should have coarsened");
    }

    #[test]
    fn test_emit_draws_culls_sectors_behind_camera() {
        let mut terrain =
            TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        let view_origin = Vec3::new(256.0, 100.0, 600.0);
        terrain.update_lod(view_origin, &proj());

        // Look along -Z: the field (z in 0..512) is ahead of the camera.
        let view = Mat4::look_to_rh(view_origin, Vec3::NEG_Z, Vec3::Y);
        let vp = proj() * view;

        let mut batch = DrawBatch::new();
        terrain.emit_draws(&vp, &mut batch);
        let ahead = batch.len();
        assert!(ahead > 0, "field in front of the camera must produce draws");

        // Look along +Z: the whole field is behind.
        let view = Mat4::look_to_rh(view_origin, Vec3::Z, Vec3::Y);
        let vp = proj() * view;
        batch.clear();
        terrain.emit_draws(&vp, &mut batch);
        assert!(
            batch.len() < ahead,
            "field behind the camera must cull more sectors"
        );
    }

    #[test]
    fn test_emit_draws_keys_follow_active_lod() {
        let mut terrain =
            TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        let view_origin = Vec3::new(32.0, 40.0, 32.0);
        terrain.update_lod(view_origin, &proj());

        let view = Mat4::look_to_rh(view_origin, Vec3::NEG_Y, Vec3::NEG_Z);
        let vp = proj() * view;
        let mut batch = DrawBatch::new();
        terrain.emit_draws(&vp, &mut batch);

        for draw in batch.draws() {
            assert_eq!(draw.lod, terrain.lod_for(draw.sector as usize).unwrap());
            assert_eq!(draw.key.mesh_id, 100 + draw.lod as u32);
            assert_eq!(draw.key.material_id, 7);
        }
    }

    #[test]
    fn test_sector_world_placement() {
        let terrain = TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        // Row-major: sector 0 sits at the terrain origin, sector 63 at
        // +448 on both horizontal axes.
        let first = terrain.bounding_volumes(0).unwrap()[0];
        assert_eq!((first.min.x, first.min.z), (0.0, 0.0));
        assert_eq!((first.max.x, first.max.z), (64.0, 64.0));
        let last = terrain.bounding_volumes(63).unwrap()[0];
        assert_eq!((last.min.x, last.min.z), (448.0, 448.0));
        assert_eq!((last.max.x, last.max.z), (512.0, 512.0));
    }

    #[test]
    fn test_out_of_range_queries() {
        let terrain = TerrainInstance::build(&descriptor(8, 7), &rolling_field(512)).unwrap();
        assert!(matches!(
            terrain.lod_for(64),
            Err(TerrainError::Sector(SectorError::OutOfRange { .. }))
        ));
        assert!(terrain.bounding_volumes(64).is_err());
        assert_eq!(terrain.bounding_volumes(63).unwrap().len(), 7);
    }
}
