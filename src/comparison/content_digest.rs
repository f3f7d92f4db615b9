use std::fmt;
use std::path::{Path, PathBuf};

use compio::BufResult;
use compio::fs::File;
use compio::io::AsyncReadAt;
use sha2::{Digest, Sha256};
use snafu::{ResultExt, Snafu};

use crate::ext::AsyncTryFrom;

const READ_CHUNK_SIZE: usize = 64 * 1024;

/// SHA-256 of a file's full byte stream.
///
/// Two files with equal digests are treated as having equal contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl AsyncTryFrom<&Path> for ContentDigest {
    type Error = DigestError;

    async fn async_try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = File::open(path).await.context(OpenSnafu {
            path: path.to_path_buf(),
        })?;

        let mut hasher = Sha256::new();
        let mut buffer = Vec::with_capacity(READ_CHUNK_SIZE);
        let mut position = 0u64;

        loop {
            buffer.clear();
            let BufResult(result, returned) = file.read_at(buffer, position).await;
            buffer = returned;
            let read = result.context(ReadSnafu {
                path: path.to_path_buf(),
            })?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
            position += read as u64;
        }

        Ok(Self(hasher.finalize().into()))
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

#[derive(Debug, Snafu)]
pub enum DigestError {
    #[snafu(display("Failed to open {} for hashing", path.display()))]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read {} while hashing", path.display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}
