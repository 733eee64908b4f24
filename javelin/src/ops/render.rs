//! Render operation - manifest types to Java source text.

use eyre::{Result, bail};
use javelin_java::JavaFile;
use javelin_manifest::Manifest;
use tracing::debug;

use crate::reports::{RenderReport, RenderedFile};

/// Render every top-level type, or only `only` when given.
pub fn render(manifest: &Manifest, only: Option<&str>) -> Result<RenderReport> {
    let selected: Vec<&JavaFile> = match only {
        Some(name) => match manifest.file(name) {
            Some(file) => vec![file],
            None => bail!(
                "no top-level type named '{}' (available: {})",
                name,
                available(manifest)
            ),
        },
        None => manifest.files().iter().collect(),
    };

    let files = selected
        .into_iter()
        .map(|file| {
            debug!(path = %file.relative_path().display(), "rendering");
            RenderedFile {
                path: file.relative_path(),
                content: file.render(),
            }
        })
        .collect();

    Ok(RenderReport { files })
}

fn available(manifest: &Manifest) -> String {
    let names: Vec<&str> = manifest
        .files()
        .iter()
        .map(|file| file.decl().name())
        .collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, str::FromStr};

    use super::*;

    fn manifest() -> Manifest {
        Manifest::from_str(
            r#"
            package = "com.example"

            [[types]]
            kind = "class"
            name = "First"

            [[types]]
            kind = "enum"
            name = "Second"
            "#,
        )
        .expect("Failed to parse manifest")
    }

    #[test]
    fn test_render_all_types_in_order() {
        let report = render(&manifest(), None).unwrap();
        let paths: Vec<PathBuf> = report.files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("com/example/First.java"),
                PathBuf::from("com/example/Second.java"),
            ]
        );
        assert_eq!(
            report.files[1].content,
            "package com.example;\n\npublic enum Second {\n}\n"
        );
    }

    #[test]
    fn test_render_single_type() {
        let report = render(&manifest(), Some("Second")).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].path, PathBuf::from("com/example/Second.java"));
    }

    #[test]
    fn test_render_unknown_type_lists_available() {
        let err = render(&manifest(), Some("Third")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no top-level type named 'Third' (available: First, Second)"
        );
    }
}
