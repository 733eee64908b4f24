//! Check operation - manifest summary.

use std::path::Path;

use javelin_manifest::Manifest;

use crate::reports::{CheckReport, TypeSummary};

/// Summarize what a validated manifest generates.
///
/// Validation itself already happened while parsing; this collects the
/// per-file details the report prints.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let types = manifest
        .files()
        .iter()
        .map(|file| {
            let writer = file.writer();
            let def = manifest.find_type(file.decl().name());
            TypeSummary {
                name: file.decl().name().to_string(),
                kind: file.decl().keyword(),
                path: file.relative_path(),
                members: def.map_or(0, |def| {
                    def.fields.len()
                        + def.constructors.len()
                        + def.methods.len()
                        + def.constants.len()
                        + def.nested.len()
                }),
                imports: writer.imports().into_iter().map(String::from).collect(),
            }
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        package: manifest.package.clone(),
        types,
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, str::FromStr};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_collects_imports_per_type() {
        let manifest = Manifest::from_str(
            r#"
            package = "com.example"

            [[types]]
            kind = "interface"
            name = "Store"
            imports = ["javax.annotation.processing.Generated"]

            [[types.methods]]
            name = "keys"
            returns = "java.util.Set<java.util.UUID>"

            [[types.methods]]
            name = "clear"
            "#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("javelin.toml"));
        assert_eq!(report.package, "com.example");
        assert_eq!(report.types.len(), 1);

        let store = &report.types[0];
        assert_eq!(store.kind, "interface");
        assert_eq!(store.members, 2);
        assert_eq!(store.path, PathBuf::from("com/example/Store.java"));
        assert_eq!(
            store.imports,
            vec![
                "java.util.Set",
                "java.util.UUID",
                "javax.annotation.processing.Generated",
            ]
        );
    }

    #[test]
    fn test_check_and_render_manifest_from_disk() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config = temp.path().join("types.json");
        std::fs::write(
            &config,
            r#"{
                "package": "com.example.jobs",
                "types": [
                    {
                        "kind": "enum",
                        "name": "JobState",
                        "constants": [{ "name": "QUEUED" }, { "name": "DONE" }]
                    }
                ]
            }"#,
        )
        .expect("Failed to write manifest");

        let manifest = Manifest::from_file(&config).unwrap();
        let report = check(&manifest, &config);
        assert_eq!(report.config_path, config);
        assert_eq!(report.types[0].kind, "enum");
        assert_eq!(report.types[0].members, 2);

        let rendered = crate::ops::render(&manifest, Some("JobState")).unwrap();
        assert_eq!(
            rendered.files[0].path,
            PathBuf::from("com/example/jobs/JobState.java")
        );
        assert_eq!(
            rendered.files[0].content,
            "package com.example.jobs;\n\npublic enum JobState {\n    QUEUED,\n    DONE;\n}\n"
        );
    }
}
