//! Terrain error types.

use relief_lod::LodError;
use relief_sector::SectorError;

/// Errors produced while building, querying, or registering terrain
/// instances.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// The descriptor cannot produce a usable instance.
    #[error("terrain configuration invalid: {reason}")]
    Configuration { reason: &'static str },

    /// Partitioning or bounds building failed.
    #[error("sector setup failed")]
    Sector(#[from] SectorError),

    /// The LOD threshold table could not be built.
    #[error("LOD setup failed")]
    Lod(#[from] LodError),

    /// A terrain with this name is already registered.
    #[error("terrain '{0}' is already registered")]
    DuplicateName(String),

    /// No terrain with this name is registered.
    #[error("terrain '{0}' is not registered")]
    UnknownName(String),
}
