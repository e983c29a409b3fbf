//! Location of the element-set catalog on disk.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Base directory holding the `.tle` catalog files.
///
/// The directory is always explicit; nothing else in the crate touches the
/// filesystem layout, so embedders can point this anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TleDir {
    base: PathBuf,
}

impl TleDir {
    pub fn new(base: impl Into<PathBuf>) -> TleDir {
        TleDir { base: base.into() }
    }

    /// Platform data directory for the catalog (`<data_dir>/tle`).
    ///
    /// Returns `None` when no home directory can be resolved, e.g. in a
    /// stripped-down container.
    pub fn default_location() -> Option<TleDir> {
        let proj_dirs = ProjectDirs::from("", "", "sattrack")?;
        Some(TleDir::new(proj_dirs.data_dir().join("tle")))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Full path of a catalog file inside the base directory.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }
}
