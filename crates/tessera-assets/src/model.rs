use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::AssetError;
use crate::mesh::Mesh;
use crate::obj::LoadStats;
use crate::obj_loader;
use crate::options::LoadOptions;

/// Owns one mesh and can reload it from a different file at any time.
///
/// Every load starts from an empty mesh. If the load fails the model stays
/// empty; it never keeps data from an earlier file.
#[derive(Debug, Default)]
pub struct Model {
    mesh: Mesh,
    source: Option<PathBuf>,
    options: LoadOptions,
}

impl Model {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Replace the current mesh with the contents of `path`.
    pub fn load_obj(&mut self, path: &Path) -> Result<LoadStats, AssetError> {
        self.clear();

        match obj_loader::load_obj(path, &self.options) {
            Ok(loaded) => {
                info!(
                    "Loaded model '{}' ({} triangles)",
                    path.display(),
                    loaded.stats.triangles
                );
                self.mesh = loaded.mesh;
                self.source = Some(path.to_path_buf());
                Ok(loaded.stats)
            }
            Err(e) => {
                warn!("Failed to load model: {}", e);
                Err(e)
            }
        }
    }

    /// Drop the current mesh.
    pub fn clear(&mut self) {
        self.mesh = Mesh::default();
        self.source = None;
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The file the current mesh came from, if the last load succeeded.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }
}
