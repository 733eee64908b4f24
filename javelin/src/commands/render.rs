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
pub struct RenderCommand {
    /// Path to the manifest (defaults to ./javelin.toml)
    #[arg(short, long, default_value = "javelin.toml")]
    pub config: PathBuf,

    /// Only render the top-level type with this name
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub type_name: Option<String>,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let report = ops::render(&manifest, self.type_name.as_deref())?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
