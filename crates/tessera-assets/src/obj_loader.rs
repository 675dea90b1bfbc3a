use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::AssetError;
use crate::obj::{self, LoadedMesh};
use crate::options::LoadOptions;

/// Load an OBJ file from disk into a mesh.
///
/// The file is read line by line and closed before this returns, whether or
/// not parsing succeeded.
pub fn load_obj(path: &Path, options: &LoadOptions) -> Result<LoadedMesh, AssetError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AssetError::NotFound(path.to_path_buf()),
        _ => AssetError::Io(path.to_path_buf(), e),
    })?;

    let loaded = obj::read_obj(BufReader::new(file), options)
        .map_err(|e| AssetError::ObjLoadFailed(path.to_path_buf(), e))?;

    debug!(
        "OBJ '{}': {} positions, {} triangles",
        path.display(),
        loaded.stats.positions,
        loaded.stats.triangles
    );

    Ok(loaded)
}
