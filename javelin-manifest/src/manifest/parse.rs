//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use tracing::debug;

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext, lower};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn from_filename(filename: &str) -> Self {
        match Path::new(filename).extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "javelin.toml", Format::Toml)
    }
}

impl Manifest {
    /// Parse a manifest file; `.json` files are read as JSON, anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a manifest with a custom filename for error reporting.
    ///
    /// The filename's extension selects the format as in [`Manifest::from_file`].
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename, Format::from_filename(filename))
    }

    /// Parse a JSON manifest (uses "javelin.json" as the filename).
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_manifest(content, "javelin.json", Format::Json)
    }
}

fn parse_manifest(content: &str, filename: &str, format: Format) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let mut manifest: Manifest = match format {
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
    };

    let ctx = ParseContext::new(content, filename);
    manifest.files = lower::lower_manifest(&manifest, &ctx)?;
    debug!(
        filename,
        package = %manifest.package,
        types = manifest.files.len(),
        "manifest loaded"
    );
    Ok(manifest)
}
