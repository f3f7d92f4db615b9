use std::fmt;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};

/// The two canonical directories being compared. Fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPair {
    source: PathBuf,
    target: PathBuf,
}

impl RootPair {
    /// Checks that both paths are existing directories, then canonicalizes them.
    ///
    /// Every missing directory is reported, not only the first one.
    pub fn resolve(source: &Path, target: &Path) -> Result<Self, RootError> {
        let missing = [source, target]
            .into_iter()
            .filter(|path| !path.is_dir())
            .map(Path::to_path_buf)
            .collect::<Vec<_>>();

        if !missing.is_empty() {
            return Err(RootError::DirectoryNotFound {
                paths: MissingPaths(missing),
            });
        }

        Ok(Self {
            source: Self::canonicalize(source)?,
            target: Self::canonicalize(target)?,
        })
    }

    fn canonicalize(path: &Path) -> Result<PathBuf, RootError> {
        path.canonicalize().context(CanonicalizeSnafu {
            path: path.to_path_buf(),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

/// Paths that failed the directory check, displayed one diagnostic per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPaths(pub Vec<PathBuf>);

impl fmt::Display for MissingPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, path) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "Directory not found '{}'", path.display())?;
        }
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum RootError {
    #[snafu(display("{paths}"))]
    DirectoryNotFound { paths: MissingPaths },
    #[snafu(display("Failed to resolve the directory {}", path.display()))]
    CanonicalizeError {
        path: PathBuf,
        source: std::io::Error,
    },
}
