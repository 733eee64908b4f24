//! JavaFile abstraction for complete compilation units.
//!
//! Ties a package, explicit imports and a single top-level type together
//! and renders them through a fresh [`Writer`].

use std::path::PathBuf;

use javelin_codegen::{Indent, Writer};
use tracing::debug;

use crate::TypeDecl;

/// A complete `.java` compilation unit.
///
/// # Example
///
/// ```
/// use javelin_java::{Class, JavaFile};
///
/// let file = JavaFile::new("com.example", Class::new("Empty"));
/// assert_eq!(file.render(), "package com.example;\n\npublic class Empty {\n}\n");
/// assert_eq!(file.file_name(), "Empty.java");
/// ```
#[derive(Debug, Clone)]
pub struct JavaFile {
    package: String,
    imports: Vec<String>,
    header: Option<String>,
    indent: Indent,
    decl: TypeDecl,
}

impl JavaFile {
    pub fn new(package: impl Into<String>, decl: impl Into<TypeDecl>) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
            header: None,
            indent: Indent::default(),
            decl: decl.into(),
        }
    }

    /// Add an explicit import, e.g. for an annotation written by simple name.
    pub fn import(mut self, qualified: impl Into<String>) -> Self {
        self.imports.push(qualified.into());
        self
    }

    /// Add multiple explicit imports.
    pub fn imports(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set a comment written above the package declaration.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn decl(&self) -> &TypeDecl {
        &self.decl
    }

    /// `<Name>.java`.
    pub fn file_name(&self) -> String {
        format!("{}.java", self.decl.name())
    }

    /// Path of the file relative to a source root: `com/example/Name.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(self.file_name());
        path
    }

    /// Write the declaration into a fresh writer, leaving imports unresolved.
    pub fn writer(&self) -> Writer {
        let mut writer = Writer::new(&self.package).with_indent(self.indent);
        for name in &self.imports {
            writer.add_import(name.as_str());
        }
        writer.write_node(&self.decl);
        writer
    }

    /// Render the full document.
    pub fn render(&self) -> String {
        debug!(
            package = %self.package,
            name = self.decl.name(),
            kind = self.decl.keyword(),
            "rendering java file"
        );
        let content = self.writer().render();
        match &self.header {
            Some(header) => format!("{}\n\n{}", header.trim_end(), content),
            None => content,
        }
    }
}
