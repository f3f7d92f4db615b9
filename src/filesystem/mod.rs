//! Filesystem access for the comparison: validated root directories and the
//! flat listing of every regular file below a root.

mod roots;
mod tree;

pub use roots::{RootError, RootPair};
pub use tree::{FileTree, FileTreeError};
