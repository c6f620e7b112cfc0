//! Bounding volumes, frustum culling, and the projected screen-size metric
//! used for terrain LOD switching.

mod aabb;
mod frustum;
mod projection;

pub use aabb::Aabb;
pub use frustum::{Frustum, FrustumCuller};
pub use projection::screen_radius_sq;
