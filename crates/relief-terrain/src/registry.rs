//! World terrain registry.
//!
//! The embedding process owns one registry per world and registers each
//! terrain instance explicitly; there is no global state.

use std::collections::HashMap;

use glam::{Mat4, Vec3};
use relief_batch::DrawBatch;

use crate::{TerrainError, TerrainInstance};

/// Registry of the terrain instances active in one world.
#[derive(Default)]
pub struct TerrainWorld {
    terrains: HashMap<String, TerrainInstance>,
}

impl TerrainWorld {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a terrain under a unique name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        terrain: TerrainInstance,
    ) -> Result<(), TerrainError> {
        let name = name.into();
        if self.terrains.contains_key(&name) {
            return Err(TerrainError::DuplicateName(name));
        }
        log::info!("registered terrain '{name}'");
        self.terrains.insert(name, terrain);
        Ok(())
    }

    /// Remove a terrain, releasing its tables.
    ///
    /// # Errors
    ///
    /// Returns `UnknownName` if no terrain is registered under `name`.
    pub fn remove(&mut self, name: &str) -> Result<TerrainInstance, TerrainError> {
        let terrain = self
            .terrains
            .remove(name)
            .ok_or_else(|| TerrainError::UnknownName(name.to_string()))?;
        log::info!("removed terrain '{name}'");
        Ok(terrain)
    }

    /// Look up a terrain by name.
    pub fn get(&self, name: &str) -> Option<&TerrainInstance> {
        self.terrains.get(name)
    }

    /// Look up a terrain by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut TerrainInstance> {
        self.terrains.get_mut(name)
    }

    /// Recompute active LODs for every registered terrain.
    pub fn update_all(&mut self, view_origin: Vec3, proj: &Mat4) {
        for terrain in self.terrains.values_mut() {
            terrain.update_lod(view_origin, proj);
        }
    }

    /// Emit draws for every registered terrain into one batch.
    pub fn emit_all(&self, view_projection: &Mat4, batch: &mut DrawBatch) {
        for terrain in self.terrains.values() {
            terrain.emit_draws(view_projection, batch);
        }
    }

    /// Number of registered terrains.
    pub fn len(&self) -> usize {
        self.terrains.len()
    }

    /// Returns true if no terrain is registered.
    pub fn is_empty(&self) -> bool {
        self.terrains.is_empty()
    }

    /// Iterate over registered terrains as `(name, instance)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TerrainInstance)> {
        self.terrains.iter().map(|(k, v)| (k.as_str(), v))
    }
}
