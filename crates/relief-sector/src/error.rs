//! Sector error types.

use relief_heightfield::HeightFieldError;

/// Errors produced while partitioning a field or building sector bounds.
#[derive(Debug, thiserror::Error)]
pub enum SectorError {
    /// The partition parameters cannot produce a valid sector grid.
    #[error(
        "cannot split a {height_field_size}-quad field into {num_sections} sections: {reason}"
    )]
    Configuration {
        height_field_size: u32,
        num_sections: u32,
        reason: &'static str,
    },

    /// A sector or LOD index lies outside the valid range.
    #[error("index {index} out of range ({count} valid)")]
    OutOfRange { index: usize, count: usize },

    /// A height-field access failed while building bounds.
    #[error("height field access failed")]
    HeightField(#[from] HeightFieldError),
}
