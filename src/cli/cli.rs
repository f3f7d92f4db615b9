use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorMode, LogLevel};

/// Compare two directory trees and list new, deleted and changed files.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// The directory treated as the original state
    pub source: Option<PathBuf>,

    /// The directory compared against the source
    pub target: Option<PathBuf>,

    /// Anything after the two roots, flags included, is accepted and ignored
    #[clap(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// When to color the section headers of the report
    #[clap(long, short, default_value = "auto", value_enum)]
    pub color: ColorMode,
}

pub fn usage() -> String {
    format!(
        "Usage: {} source-directory target-directory",
        env!("CARGO_PKG_NAME")
    )
}
