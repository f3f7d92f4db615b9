mod cli;

pub use cli::{Cli, usage};
