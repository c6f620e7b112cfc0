//! Terrain instance lifecycle and per-frame LOD evaluation.
//!
//! A [`TerrainInstance`] owns one height field's sector and bounds
//! tables, built once at load time, and recomputes per-sector LOD levels
//! from the camera each frame. Instances live in a [`TerrainWorld`]
//! registry owned by the embedding process.

mod error;
mod instance;
mod registry;

pub use error::TerrainError;
pub use instance::{TerrainDescriptor, TerrainInstance, TerrainMeshSet};
pub use registry::TerrainWorld;
