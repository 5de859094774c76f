//! Sourcemap discovery in the build output directory.

use crate::types::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find every `*.map` file under `dist_dir`, recursively.
///
/// The returned order is whatever the glob traversal yields; in serial mode it
/// becomes the upload order. An empty result is valid and means the publisher
/// has nothing to do.
pub fn find_sourcemaps(dist_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.map", dist_dir.display());

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern)? {
        paths.push(entry?);
    }

    debug!("Discovered {} sourcemap(s) under {}", paths.len(), dist_dir.display());
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "{}").unwrap();
    }

    #[test]
    fn test_finds_nested_maps() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("main.js.map"));
        touch(&dir.path().join("assets/chunk.js.map"));
        touch(&dir.path().join("assets/deep/vendor.js.map"));
        touch(&dir.path().join("assets/chunk.js")); // not a map

        let mut found = find_sourcemaps(dir.path()).unwrap();
        found.sort();

        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|p| p.extension().unwrap() == "map"));
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_sourcemaps(dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_sourcemaps(&dir.path().join("no-such-dist")).unwrap();
        assert!(found.is_empty());
    }
}
