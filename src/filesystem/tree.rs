use std::path::{Path, PathBuf, StripPrefixError};

use snafu::{ResultExt, Snafu};
use tracing::debug;
use walkdir::WalkDir;

/// Every file below a root, as paths relative to that root.
///
/// Symlinks to files count as files and are later hashed through the link.
/// Directories are not recorded, so an empty directory leaves no trace.
/// Entries keep the walk order, which is sorted by file name at every level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTree {
    files: Vec<PathBuf>,
}

impl FileTree {
    pub fn scan(root: &Path) -> Result<Self, FileTreeError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry.context(WalkSnafu {
                root: root.to_path_buf(),
            })?;

            if !entry.path().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root)
                .context(StripPrefixSnafu {
                    path: entry.path().to_path_buf(),
                })?;
            files.push(relative.to_path_buf());
        }

        debug!("Found {} files under {}", files.len(), root.display());
        Ok(Self { files })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl IntoIterator for FileTree {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

#[derive(Debug, Snafu)]
pub enum FileTreeError {
    #[snafu(display("Failed to walk the directory tree under {}", root.display()))]
    WalkError {
        root: PathBuf,
        source: walkdir::Error,
    },
    #[snafu(display("File {} is not located under the scanned root", path.display()))]
    StripPrefixError {
        path: PathBuf,
        source: StripPrefixError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn paths(tree: &FileTree) -> Vec<&Path> {
        tree.files().iter().map(PathBuf::as_path).collect()
    }

    #[test]
    fn lists_files_relative_to_root() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();

        let tree = FileTree::scan(dir.path()).unwrap();

        assert_eq!(paths(&tree), vec![Path::new("a.txt"), Path::new("b.txt")]);
    }

    #[test]
    fn descends_into_nested_directories_in_name_order() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("z.txt"), "z").unwrap();
        fs::write(dir.path().join("sub/deeper/leaf.txt"), "leaf").unwrap();
        fs::write(dir.path().join("sub/inner.txt"), "inner").unwrap();

        let tree = FileTree::scan(dir.path()).unwrap();

        assert_eq!(
            paths(&tree),
            vec![
                Path::new("sub/deeper/leaf.txt"),
                Path::new("sub/inner.txt"),
                Path::new("z.txt"),
            ]
        );
    }

    #[test]
    fn skips_empty_directories() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("empty/also-empty")).unwrap();

        let tree = FileTree::scan(dir.path()).unwrap();

        assert!(tree.files().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn lists_symlinked_files() {
        let outside = TempDir::new().expect("Failed to create outside dir");
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(outside.path().join("real.txt"), "real").unwrap();
        std::os::unix::fs::symlink(outside.path().join("real.txt"), dir.path().join("linked.txt"))
            .unwrap();

        let tree = FileTree::scan(dir.path()).unwrap();

        assert_eq!(paths(&tree), vec![Path::new("linked.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn skips_dangling_symlinks() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::os::unix::fs::symlink(dir.path().join("missing.txt"), dir.path().join("dangling"))
            .unwrap();

        let tree = FileTree::scan(dir.path()).unwrap();

        assert!(tree.files().is_empty());
    }

    #[test]
    fn fails_on_missing_root() {
        let dir = TempDir::new().expect("Failed to create temp dir");

        let result = FileTree::scan(&dir.path().join("gone"));

        assert!(matches!(result, Err(FileTreeError::WalkError { .. })));
    }
}
