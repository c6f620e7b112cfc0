/// Identifier for a batchable draw call.
///
/// Ordering is lexicographic over (mesh, material, submesh) via the
/// derived implementation and field order, so draws sharing a mesh and
/// material sort adjacently. Distinct triples never compare equal;
/// packing the three fields into one integer loses that guarantee once
/// the id ranges overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DrawKey {
    /// Opaque mesh identifier.
    pub mesh_id: u32,
    /// Opaque material identifier.
    pub material_id: u32,
    /// Submesh within the mesh.
    pub submesh_index: u32,
}

impl DrawKey {
    /// Create a key from its three components.
    pub fn new(mesh_id: u32, material_id: u32, submesh_index: u32) -> Self {
        Self {
            mesh_id,
            material_id,
            submesh_index,
        }
    }
}
