//! Sector partitioning and per-LOD bounds building for terrain height
//! fields.
//!
//! A height field is divided into a regular grid of square sectors, the
//! unit of LOD selection. Each sector gets a ladder of bounding volumes,
//! one per LOD level, computed once at load time.

mod bounds;
mod error;
mod partition;
mod sector;

pub use bounds::build_bounds;
pub use error::SectorError;
pub use partition::partition;
pub use sector::Sector;
