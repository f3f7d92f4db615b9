use std::path::{Path, PathBuf};

use hashlink::LinkedHashSet;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::comparison::{Classification, ContentDigest, DigestError};
use crate::ext::AsyncTryFrom;
use crate::filesystem::{FileTree, FileTreeError, RootPair};

/// Verdict for a relative path that exists under both roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileComparison {
    /// Lengths differ, so no hashing was needed.
    SizeMismatch { source: u64, target: u64 },
    DigestMismatch,
    Identical,
}

impl FileComparison {
    pub fn is_changed(&self) -> bool {
        !matches!(self, FileComparison::Identical)
    }
}

pub struct TreeComparator<'r> {
    roots: &'r RootPair,
}

impl<'r> TreeComparator<'r> {
    pub fn new(roots: &'r RootPair) -> Self {
        Self { roots }
    }

    /// Walks both roots and classifies every relative path found under either.
    ///
    /// A source path missing from the target is deleted. A source path found in
    /// the target consumes it and is compared by content. Target paths left
    /// unconsumed at the end are new.
    pub async fn compare(&self) -> Result<Classification, ComparisonError> {
        let source_tree = FileTree::scan(self.roots.source()).context(ScanSnafu)?;
        let target_tree = FileTree::scan(self.roots.target()).context(ScanSnafu)?;
        debug!(
            "Comparing {} files under {} with {} files under {}",
            source_tree.files().len(),
            self.roots.source().display(),
            target_tree.files().len(),
            self.roots.target().display()
        );

        let mut unmatched = target_tree.into_iter().collect::<LinkedHashSet<_>>();
        let mut deleted = Vec::new();
        let mut changed = Vec::new();

        for relative in source_tree {
            if !unmatched.remove(&relative) {
                debug!("{} only exists in the source", relative.display());
                deleted.push(relative);
                continue;
            }

            let comparison = self.compare_file(&relative).await?;
            debug!("{}: {:?}", relative.display(), comparison);
            if comparison.is_changed() {
                changed.push(relative);
            }
        }

        let new = unmatched.into_iter().collect();
        Ok(Classification::new(new, deleted, changed))
    }

    /// Compares sizes first and hashes both files only when the sizes agree.
    pub async fn compare_file(&self, relative: &Path) -> Result<FileComparison, ComparisonError> {
        let source = self.roots.source().join(relative);
        let target = self.roots.target().join(relative);

        let source_size = Self::file_size(&source).await?;
        let target_size = Self::file_size(&target).await?;
        if source_size != target_size {
            return Ok(FileComparison::SizeMismatch {
                source: source_size,
                target: target_size,
            });
        }

        let source_digest = ContentDigest::async_try_from(source.as_path())
            .await
            .context(DigestSnafu)?;
        let target_digest = ContentDigest::async_try_from(target.as_path())
            .await
            .context(DigestSnafu)?;

        if source_digest == target_digest {
            Ok(FileComparison::Identical)
        } else {
            debug!(
                "Digest {} differs from {} for {}",
                source_digest,
                target_digest,
                relative.display()
            );
            Ok(FileComparison::DigestMismatch)
        }
    }

    async fn file_size(path: &Path) -> Result<u64, ComparisonError> {
        let metadata = compio::fs::metadata(path).await.context(MetadataSnafu {
            path: path.to_path_buf(),
        })?;
        Ok(metadata.len())
    }
}

#[derive(Debug, Snafu)]
pub enum ComparisonError {
    #[snafu(display("Failed to list the files of a directory tree"))]
    ScanError { source: FileTreeError },
    #[snafu(display("Failed to read the metadata of {}", path.display()))]
    MetadataError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to compute a content digest"))]
    DigestError { source: DigestError },
}
