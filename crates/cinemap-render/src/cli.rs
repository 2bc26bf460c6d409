//! Command line arguments for the `cinemap` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{RenderConfig, DEFAULT_OUTPUT_PATH};

/// Render a keyframed map camera track to JSON lines.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "cinemap", author, version, about, long_about = None)]
pub struct Args {
    /// Project document to render
    #[arg(env = "CINEMAP_PROJECT")]
    pub project: Option<PathBuf>,

    /// Camera track output (JSON lines)
    #[arg(env = "CINEMAP_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

impl RenderConfig {
    /// Apply the paths given on the command line.
    pub fn with_cli(mut self, args: Args) -> Self {
        if let Some(project) = args.project {
            self.project_path = Some(project);
        }
        self.output_path = args.output;
        self
    }
}
