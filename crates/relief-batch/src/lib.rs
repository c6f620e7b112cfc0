//! Draw-command keys and batch grouping for sector draws.
//!
//! Sectors that survive culling are recorded as draws keyed by
//! (mesh, material, submesh). Sorting the batch brings draws sharing a
//! mesh and material together so a downstream submission stage can merge
//! them.

mod batching;
mod draw_key;

pub use batching::{DrawBatch, DrawGroup, DrawGroupIter, SectorDraw};
pub use draw_key::DrawKey;
