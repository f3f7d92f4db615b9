//! Classification of two file trees into new, deleted and changed paths.

mod classification;
mod comparator;
mod content_digest;

pub use classification::{Category, Classification};
pub use comparator::{ComparisonError, TreeComparator};
pub use content_digest::{ContentDigest, DigestError};
