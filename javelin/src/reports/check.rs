//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// What one top-level type generates.
#[derive(Debug)]
pub struct TypeSummary {
    pub name: String,
    /// `class`, `interface` or `enum`.
    pub kind: &'static str,
    /// Path of the generated file relative to the source root.
    pub path: PathBuf,
    /// Direct members: fields, constructors, methods, constants and nested types.
    pub members: usize,
    /// Imports the file will declare, sorted.
    pub imports: Vec<String>,
}

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub package: String,
    pub types: Vec<TypeSummary>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        let package = if self.package.is_empty() {
            "(default package)"
        } else {
            self.package.as_str()
        };
        out.key_value_indented("package", package);
        out.newline();

        let count = self.types.len();
        out.section(&format!(
            "  {} type{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for summary in &self.types {
            out.list_item(&format!(
                "{} {} -> {} ({} member{})",
                summary.kind,
                summary.name,
                summary.path.display(),
                summary.members,
                if summary.members == 1 { "" } else { "s" }
            ));
            for import in &summary.imports {
                out.preformatted(&format!("      import {};", import));
            }
        }
    }
}
