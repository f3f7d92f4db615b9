use std::io::{self, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::comparison::{ComparisonError, TreeComparator};
use crate::filesystem::{RootError, RootPair};
use crate::report::Report;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();

        let roots = RootPair::resolve(&app_config.source, &app_config.target)?;
        debug!("Resolved roots: {:?}", roots);

        let classification = TreeComparator::new(&roots)
            .compare()
            .await
            .context(ComparisonSnafu)?;
        if classification.is_empty() {
            info!("No differences between the directory trees");
        }
        info!(
            "Classified {} new, {} deleted and {} changed files",
            classification.new_files().len(),
            classification.deleted_files().len(),
            classification.changed_files().len()
        );

        let colorize = app_config.color.should_colorize();
        colored::control::set_override(colorize);

        let report = Report::new(roots.source(), &classification, colorize);
        let mut stdout = io::stdout().lock();
        write!(stdout, "{report}").context(OutputSnafu)?;
        stdout.flush().context(OutputSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(transparent)]
    RootsError { source: RootError },
    #[snafu(display("Critical failure encountered while comparing the directory trees"))]
    ComparisonError { source: ComparisonError },
    #[snafu(display("Failed to write the report to stdout"))]
    OutputError { source: io::Error },
}
