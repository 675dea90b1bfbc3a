use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::AssetError;
use crate::handle::{next_asset_id, AssetId, MeshHandle};
use crate::mesh::Mesh;
use crate::obj::LoadStats;
use crate::obj_loader;
use crate::options::LoadOptions;

/// A mesh held by the server along with where it came from.
#[derive(Debug, Clone)]
pub struct MeshEntry {
    pub mesh: Mesh,
    pub path: PathBuf,
    pub stats: LoadStats,
    /// Starts at 0 and increases by one on every successful reload.
    pub revision: u32,
}

/// Central mesh registry. Loads OBJ files, caches them by path, and hands out
/// handles that survive reloads.
pub struct AssetServer {
    base_path: PathBuf,
    options: LoadOptions,
    meshes: HashMap<AssetId, MeshEntry>,
    path_to_mesh: HashMap<PathBuf, MeshHandle>,
}

impl AssetServer {
    /// Create a new AssetServer rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>, options: LoadOptions) -> Self {
        let base_path = base_path.into();
        info!("AssetServer created with base path: {}", base_path.display());
        Self {
            base_path,
            options,
            meshes: HashMap::new(),
            path_to_mesh: HashMap::new(),
        }
    }

    /// Resolve a relative asset path against the base path.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Load an OBJ file and return a handle to its mesh.
    /// Subsequent loads of the same path return the cached handle.
    pub fn load_mesh(&mut self, path: &Path) -> Result<MeshHandle, AssetError> {
        let full_path = self.resolve(path);

        if let Some(&handle) = self.path_to_mesh.get(&full_path) {
            return Ok(handle);
        }

        let loaded = obj_loader::load_obj(&full_path, &self.options)?;

        let handle = MeshHandle::new(next_asset_id());
        self.meshes.insert(
            handle.id(),
            MeshEntry {
                mesh: loaded.mesh,
                path: full_path.clone(),
                stats: loaded.stats,
                revision: 0,
            },
        );
        self.path_to_mesh.insert(full_path, handle);

        Ok(handle)
    }

    /// Re-read a mesh from its file, replacing the cached data.
    ///
    /// On failure the mesh is evicted and the handle stops resolving, so a
    /// stale mesh is never served in place of the file's current contents.
    pub fn reload_mesh(&mut self, handle: MeshHandle) -> Result<&MeshEntry, AssetError> {
        let entry = self
            .meshes
            .get(&handle.id())
            .ok_or(AssetError::UnknownHandle(handle.id()))?;
        let path = entry.path.clone();
        let revision = entry.revision;

        match obj_loader::load_obj(&path, &self.options) {
            Ok(loaded) => {
                let entry = MeshEntry {
                    mesh: loaded.mesh,
                    path,
                    stats: loaded.stats,
                    revision: revision.wrapping_add(1),
                };
                self.meshes.insert(handle.id(), entry);
                info!("Reloaded {} from {}", handle, self.meshes[&handle.id()].path.display());
                Ok(&self.meshes[&handle.id()])
            }
            Err(e) => {
                warn!("Reload of {} failed, evicting: {}", handle, e);
                self.unload_mesh(handle);
                Err(e)
            }
        }
    }

    /// Remove a mesh from the cache, returning it if it was loaded.
    pub fn unload_mesh(&mut self, handle: MeshHandle) -> Option<Mesh> {
        let entry = self.meshes.remove(&handle.id())?;
        self.path_to_mesh.remove(&entry.path);
        Some(entry.mesh)
    }

    /// Get a reference to a loaded mesh by its handle.
    pub fn get_mesh(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(&handle.id()).map(|entry| &entry.mesh)
    }

    pub fn entry(&self, handle: MeshHandle) -> Option<&MeshEntry> {
        self.meshes.get(&handle.id())
    }

    /// Check if a mesh handle refers to a loaded asset.
    pub fn is_mesh_loaded(&self, handle: MeshHandle) -> bool {
        self.meshes.contains_key(&handle.id())
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// The base path this server resolves relative paths against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    const QUAD: &str = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";

    #[test]
    fn missing_file_returns_error() {
        let mut server = AssetServer::new("/nonexistent", LoadOptions::default());
        let result = server.load_mesh(Path::new("does_not_exist.obj"));
        match result.unwrap_err() {
            AssetError::NotFound(_) => {}
            other => panic!("expected NotFound, got: {:?}", other),
        }
        assert!(server.is_empty());
    }

    #[test]
    fn resolve_absolute_path() {
        let server = AssetServer::new("/home/user/assets", LoadOptions::default());
        assert_eq!(
            server.resolve(Path::new("/absolute/path.obj")),
            PathBuf::from("/absolute/path.obj")
        );
    }

    #[test]
    fn resolve_relative_path() {
        let server = AssetServer::new("/home/user/assets", LoadOptions::default());
        assert_eq!(
            server.resolve(Path::new("models/monkey.obj")),
            PathBuf::from("/home/user/assets/models/monkey.obj")
        );
    }

    #[test]
    fn same_path_is_loaded_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tri.obj"), TRIANGLE).unwrap();

        let mut server = AssetServer::new(dir.path(), LoadOptions::default());
        let a = server.load_mesh(Path::new("tri.obj")).unwrap();
        let b = server.load_mesh(&dir.path().join("tri.obj")).unwrap();

        assert_eq!(a, b);
        assert_eq!(server.len(), 1);
        assert_eq!(server.get_mesh(a).unwrap().triangle_count(), 1);
    }

    #[test]
    fn reload_picks_up_new_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.obj");
        fs::write(&path, TRIANGLE).unwrap();

        let mut server = AssetServer::new(dir.path(), LoadOptions::default());
        let handle = server.load_mesh(Path::new("model.obj")).unwrap();

        fs::write(&path, QUAD).unwrap();
        let entry = server.reload_mesh(handle).unwrap();
        assert_eq!(entry.revision, 1);
        assert_eq!(entry.mesh.triangle_count(), 2);
        assert_eq!(server.get_mesh(handle).unwrap().positions().len(), 4);
    }

    #[test]
    fn failed_reload_evicts_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.obj");
        fs::write(&path, TRIANGLE).unwrap();

        let mut server = AssetServer::new(dir.path(), LoadOptions::default());
        let handle = server.load_mesh(Path::new("model.obj")).unwrap();

        fs::write(&path, "v 0 0 0\nf 1 2 3\n").unwrap();
        assert!(server.reload_mesh(handle).is_err());
        assert!(!server.is_mesh_loaded(handle));
        assert!(matches!(
            server.reload_mesh(handle),
            Err(AssetError::UnknownHandle(_))
        ));

        // The path is free to load again once fixed.
        fs::write(&path, TRIANGLE).unwrap();
        let fresh = server.load_mesh(Path::new("model.obj")).unwrap();
        assert_ne!(fresh, handle);
    }
}
