use slotmap::SlotMap;

use crate::error::SceneError;
use crate::tessellation::TriangleMesh;

slotmap::new_key_type! {
    /// Generational handle to a mesh owned by a [`MeshStore`].
    pub struct MeshId;
}

/// Arena owning every mesh of a scene.
///
/// Releasing a mesh drops its data but keeps a tombstone in its slot, so a
/// stale handle is reported as [`SceneError::MeshReleased`] rather than
/// silently missing.
#[derive(Debug, Default)]
pub struct MeshStore {
    meshes: SlotMap<MeshId, Option<TriangleMesh>>,
}

impl MeshStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a mesh and returns its handle.
    pub fn insert(&mut self, mesh: TriangleMesh) -> MeshId {
        self.meshes.insert(Some(mesh))
    }

    /// Returns the mesh behind `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MeshReleased`] if the mesh was released, or
    /// [`SceneError::MeshNotFound`] if `id` was never issued by this store.
    pub fn get(&self, id: MeshId) -> Result<&TriangleMesh, SceneError> {
        self.meshes
            .get(id)
            .ok_or(SceneError::MeshNotFound)?
            .as_ref()
            .ok_or(SceneError::MeshReleased)
    }

    /// Releases the mesh behind `id`, freeing its buffers.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MeshReleased`] on a second release of the same
    /// handle, or [`SceneError::MeshNotFound`] for a foreign handle.
    pub fn release(&mut self, id: MeshId) -> Result<(), SceneError> {
        let slot = self.meshes.get_mut(id).ok_or(SceneError::MeshNotFound)?;
        if slot.take().is_some() {
            Ok(())
        } else {
            Err(SceneError::MeshReleased)
        }
    }

    /// Number of meshes not yet released.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.meshes.values().filter(|m| m.is_some()).count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_release() {
        let mut store = MeshStore::new();
        let id = store.insert(TriangleMesh::default());
        assert!(store.get(id).is_ok());
        assert_eq!(store.live_count(), 1);

        store.release(id).unwrap();
        assert_eq!(store.live_count(), 0);
        assert!(matches!(store.get(id), Err(SceneError::MeshReleased)));
    }

    #[test]
    fn double_release_is_reported() {
        let mut store = MeshStore::new();
        let id = store.insert(TriangleMesh::default());
        store.release(id).unwrap();
        assert!(matches!(store.release(id), Err(SceneError::MeshReleased)));
    }

    #[test]
    fn foreign_handle_is_not_found() {
        let mut store = MeshStore::new();
        assert!(matches!(store.release(MeshId::default()), Err(SceneError::MeshNotFound)));
    }
}
