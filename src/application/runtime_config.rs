use std::path::PathBuf;

use snafu::Snafu;
use tracing::debug;

use crate::application::data::ColorMode;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub source: PathBuf,
    pub target: PathBuf,
    pub color: ColorMode,
}

impl TryFrom<Cli> for RuntimeConfig {
    type Error = MissingArgumentsError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if !cli.extra.is_empty() {
            debug!("Ignoring extra arguments: {:?}", cli.extra);
        }

        match (cli.source, cli.target) {
            (Some(source), Some(target)) => Ok(Self {
                source,
                target,
                color: cli.color,
            }),
            (None, _) => Err(MissingArgumentsError { missing: "source" }),
            (Some(_), None) => Err(MissingArgumentsError { missing: "target" }),
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(display("Missing the {missing} directory argument"))]
pub struct MissingArgumentsError {
    missing: &'static str,
}
