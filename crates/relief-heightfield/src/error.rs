//! Height-field error types.

/// Errors produced by height-field construction and access.
#[derive(Debug, thiserror::Error)]
pub enum HeightFieldError {
    /// The sample vector does not match the declared field size.
    #[error("a size-{size} field needs {expected} samples, got {actual}")]
    DimensionMismatch {
        size: u32,
        expected: usize,
        actual: usize,
    },

    /// A sample coordinate lies outside the grid.
    #[error("sample ({x}, {z}) outside a grid of {samples_per_axis} samples per axis")]
    OutOfRange {
        x: u32,
        z: u32,
        samples_per_axis: u32,
    },

    /// A range query was given a stride of zero.
    #[error("range query stride must be at least 1")]
    ZeroStride,
}
