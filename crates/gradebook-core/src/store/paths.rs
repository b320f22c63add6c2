//! Store layout and discovery

use std::path::{Path, PathBuf};

use crate::error::{GradebookError, Result};

/// Default store directory name
pub const DEFAULT_STORE_DIR: &str = ".gradebook";

/// Configuration file inside the store
pub const CONFIG_FILE: &str = "config.toml";

/// Walk up from `root` until a directory containing a store is found
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(GradebookError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
