//! Sector draw collection, sorting, and group iteration.

use crate::DrawKey;

/// One visible sector recorded for drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectorDraw {
    /// Batching key for this draw.
    pub key: DrawKey,
    /// Index of the sector in its terrain's sector table.
    pub sector: u32,
    /// LOD level the sector was selected at.
    pub lod: u8,
}

/// A reusable collection of sector draws that can be sorted and grouped.
#[derive(Default)]
pub struct DrawBatch {
    draws: Vec<SectorDraw>,
    sorted: bool,
}

impl DrawBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty batch with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            draws: Vec::with_capacity(capacity),
            sorted: false,
        }
    }

    /// Record a draw.
    pub fn push(&mut self, draw: SectorDraw) {
        self.draws.push(draw);
        self.sorted = false;
    }

    /// Sort draws by key so that shared (mesh, material) runs become
    /// contiguous.
    pub fn sort(&mut self) {
        self.draws.sort_unstable_by_key(|d| d.key);
        self.sorted = true;
    }

    /// Clear for reuse next frame, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.draws.clear();
        self.sorted = false;
    }

    /// Number of recorded draws.
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    /// Whether the batch holds no draws.
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Whether the batch has been sorted since the last modification.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// All recorded draws in their current order.
    pub fn draws(&self) -> &[SectorDraw] {
        &self.draws
    }

    /// Iterate over groups of draws sharing the same mesh and material.
    ///
    /// Call [`sort`](Self::sort) first; grouping walks the slice in
    /// order and only finds runs that are already contiguous.
    pub fn groups(&self) -> DrawGroupIter<'_> {
        DrawGroupIter {
            draws: &self.draws,
            cursor: 0,
        }
    }
}

/// A run of draws sharing the same mesh and material, mergeable into a
/// single submission downstream.
#[derive(Debug)]
pub struct DrawGroup<'a> {
    /// Mesh shared by every draw in this group.
    pub mesh_id: u32,
    /// Material shared by every draw in this group.
    pub material_id: u32,
    /// The draws in this group.
    pub draws: &'a [SectorDraw],
}

/// Iterator over [`DrawGroup`]s within a [`DrawBatch`].
pub struct DrawGroupIter<'a> {
    draws: &'a [SectorDraw],
    cursor: usize,
}

impl<'a> Iterator for DrawGroupIter<'a> {
    type Item = DrawGroup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.draws.len() {
            return None;
        }

        let start = self.cursor;
        let mesh_id = self.draws[start].key.mesh_id;
        let material_id = self.draws[start].key.material_id;

        while self.cursor < self.draws.len()
            && self.draws[self.cursor].key.mesh_id == mesh_id
            && self.draws[self.cursor].key.material_id == material_id
        {
            self.cursor += 1;
        }

        Some(DrawGroup {
            mesh_id,
            material_id,
            draws: &self.draws[start..self.cursor],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(mesh: u32, material: u32, sector: u32, lod: u8) -> SectorDraw {
        SectorDraw {
            key: DrawKey::new(mesh, material, 0),
            sector,
            lod,
        }
    }

    #[test]
    fn test_empty_batch_has_no_groups() {
        let batch = DrawBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.groups().count(), 0);
    }

    #[test]
    fn test_sort_groups_shared_mesh_material() {
        let mut batch = DrawBatch::new();
        batch.push(draw(1, 1, 0, 0));
        batch.push(draw(2, 1, 1, 2));
        batch.push(draw(1, 1, 2, 1));
        batch.sort();

        let groups: Vec<_> = batch.groups().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].mesh_id, groups[0].material_id), (1, 1));
        assert_eq!(groups[0].draws.len(), 2);
        assert_eq!((groups[1].mesh_id, groups[1].material_id), (2, 1));
        assert_eq!(groups[1].draws.len(), 1);
    }

    #[test]
    fn test_group_order_follows_key_order() {
        let mut batch = DrawBatch::new();
        batch.push(draw(2, 2, 0, 0));
        batch.push(draw(1, 2, 1, 0));
        batch.push(draw(1, 1, 2, 0));
        batch.push(draw(2, 1, 3, 0));
        batch.sort();

        let order: Vec<_> = batch
            .groups()
            .map(|g| (g.mesh_id, g.material_id))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_push_invalidates_sorted_flag() {
        let mut batch = DrawBatch::new();
        batch.push(draw(1, 1, 0, 0));
        batch.sort();
        assert!(batch.is_sorted());
        batch.push(draw(1, 1, 1, 0));
        assert!(!batch.is_sorted());
    }

    #[test]
    fn test_clear_keeps_capacity_for_reuse() {
        let mut batch = DrawBatch::with_capacity(64);
        batch.push(draw(1, 1, 0, 0));
        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.groups().count(), 0);
    }

    #[test]
    fn test_draws_preserve_sector_and_lod() {
        let mut batch = DrawBatch::new();
        batch.push(draw(5, 9, 17, 3));
        batch.sort();
        let group = batch.groups().next().unwrap();
        assert_eq!(group.draws[0].sector, 17);
        assert_eq!(group.draws[0].lod, 3);
    }
}
