//! Elevation sample grids: immutable height-field storage with checked
//! access, plus a procedural fBm source for synthetic fields.

mod error;
mod fbm;
mod heightfield;

pub use error::HeightFieldError;
pub use fbm::{FbmHeightSource, FbmParams};
pub use heightfield::HeightField;
