//! LOD error types.

/// Errors produced while building the LOD threshold table.
#[derive(Debug, thiserror::Error)]
pub enum LodError {
    /// The threshold parameters cannot produce a valid table.
    #[error("invalid LOD thresholds: {reason}")]
    Configuration { reason: &'static str },
}
