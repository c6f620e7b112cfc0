//! Height-field partitioning into a regular sector grid.

use crate::{Sector, SectorError};

/// Divide a `height_field_size`-quad field into `num_sections^2` square
/// sectors, row-major.
///
/// The sector quad count is `height_field_size / num_sections` and must
/// be a power of two so that quad density can halve per LOD level.
///
/// # Errors
///
/// Returns `SectorError::Configuration` when `num_sections` is zero,
/// when the field size is not evenly divisible, or when the resulting
/// quad count is not a power of two.
pub fn partition(height_field_size: u32, num_sections: u32) -> Result<Vec<Sector>, SectorError> {
    let config_err = |reason| SectorError::Configuration {
        height_field_size,
        num_sections,
        reason,
    };

    if num_sections == 0 {
        return Err(config_err("section count must be positive"));
    }
    if height_field_size == 0 || height_field_size % num_sections != 0 {
        return Err(config_err("field size must be evenly divisible by section count"));
    }
    let quad_count = height_field_size / num_sections;
    if !quad_count.is_power_of_two() {
        return Err(config_err("sector quad count must be a power of two"));
    }

    let mut sectors = Vec::with_capacity(num_sections as usize * num_sections as usize);
    for row in 0..num_sections {
        for col in 0..num_sections {
            sectors.push(Sector {
                row,
                col,
                quad_count,
            });
        }
    }
    Ok(sectors)
}
