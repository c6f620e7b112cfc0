//! Camera-sweep demo: builds a procedural terrain, flies the camera away
//! from it, and reports per-step LOD distribution and batch statistics.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use glam::{Mat4, Vec3};
use relief_batch::DrawBatch;
use relief_config::Config;
use relief_heightfield::{FbmHeightSource, FbmParams};
use relief_terrain::{TerrainDescriptor, TerrainInstance, TerrainMeshSet, TerrainWorld};

#[derive(Parser, Debug)]
#[command(about = "Terrain LOD sector manager demo")]
struct Args {
    /// Directory holding config.ron (created if missing).
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Height field size in quads per axis.
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Seed for the procedural height source.
    #[arg(long, default_value_t = 0)]
    seed: u32,

    /// Number of camera sweep steps.
    #[arg(long, default_value_t = 12)]
    steps: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = Config::load_or_create(&args.config_dir)?;
    relief_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let source = FbmHeightSource::new(FbmParams {
        seed: args.seed,
        ..Default::default()
    });
    let field = source.generate(args.size);

    // Partition validation happens in `build`; this only sizes the mesh set.
    let quad_count = args.size / config.terrain.num_sections.max(1);
    let lod_count = quad_count.checked_ilog2().map_or(1, |l| l + 1);

    let descriptor = TerrainDescriptor {
        num_sections: config.terrain.num_sections,
        height_scale: config.terrain.height_scale,
        world_origin: Vec3::ZERO,
        lod0_screen_size: config.terrain.lod0_screen_size,
        lod0_distribution: config.terrain.lod0_distribution,
        lodx_distribution: config.terrain.lodx_distribution,
        mesh_set: TerrainMeshSet {
            lod_meshes: (0..lod_count).collect(),
            material_id: 0,
            submesh_index: 0,
        },
    };

    let terrain = TerrainInstance::build(&descriptor, &field)?;
    let mut world = TerrainWorld::new();
    world.register("demo", terrain)?;

    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.5, 1_000_000.0);
    let center = args.size as f32 * 0.5;
    let mut batch = DrawBatch::new();

    for step in 0..args.steps {
        // Pull the camera back and up along a diagonal each step.
        let height = 50.0 * 2.0_f32.powi(step as i32);
        let view_origin = Vec3::new(center, height, center + height);
        let look = Mat4::look_to_rh(
            view_origin,
            (Vec3::new(center, 0.0, center) - view_origin).normalize(),
            Vec3::Y,
        );

        world.update_all(view_origin, &proj);
        batch.clear();
        world.emit_all(&(proj * look), &mut batch);
        batch.sort();

        let terrain = world.get("demo").ok_or("terrain missing from registry")?;
        let mut histogram = vec![0usize; terrain.lod_count() as usize];
        for &lod in terrain.active_lods() {
            histogram[lod as usize] += 1;
        }

        tracing::info!(
            step,
            camera_height = height,
            visible = batch.len(),
            groups = batch.groups().count(),
            ?histogram,
            "sweep step"
        );

        if config.debug.show_bounds {
            for (i, _) in terrain.sectors().iter().enumerate().take(4) {
                let volumes = terrain.bounding_volumes(i)?;
                tracing::debug!(sector = i, ?volumes, "sector bounds");
            }
        }
    }

    Ok(())
}
