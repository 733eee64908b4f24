use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use javelin_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the manifest (defaults to ./javelin.toml)
    #[arg(short, long, default_value = "javelin.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Validate the manifest and print what it would generate
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let report = ops::check(&manifest, &self.config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
