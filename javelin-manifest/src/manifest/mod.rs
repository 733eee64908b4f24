//! Manifest types and parsing for javelin.toml files.

mod parse;
mod validate;

use javelin_java::JavaFile;
use serde::Deserialize;
pub use validate::ParseContext;

use crate::{IndentSetting, TypeDef};

/// Root manifest for javelin.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Target package; empty for the default package
    #[serde(default)]
    pub package: String,

    /// Comment written above the package line of every file
    #[serde(default)]
    pub header: Option<String>,

    /// Indentation unit: a width in spaces or `"tab"`
    #[serde(default)]
    pub indent: Option<IndentSetting>,

    /// Top-level types, one generated file each
    #[serde(default)]
    pub types: Vec<TypeDef>,

    /// Lowered files, filled in once validation succeeds
    #[serde(skip)]
    files: Vec<JavaFile>,
}

impl Manifest {
    /// One compilation unit per top-level type, in declaration order.
    pub fn files(&self) -> &[JavaFile] {
        &self.files
    }

    /// The file generated for the top-level type `name`.
    pub fn file(&self, name: &str) -> Option<&JavaFile> {
        self.files.iter().find(|file| file.decl().name() == name)
    }

    /// Look up a top-level type declaration by name.
    pub fn find_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|def| def.name == name)
    }
}
