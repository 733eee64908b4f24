//! Render command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// One rendered compilation unit.
#[derive(Debug)]
pub struct RenderedFile {
    /// Path relative to the source root, e.g. `com/example/User.java`.
    pub path: PathBuf,
    pub content: String,
}

/// Report data from rendering a manifest.
#[derive(Debug)]
pub struct RenderReport {
    pub files: Vec<RenderedFile>,
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        // A lone document is printed bare so it can be redirected into a file.
        if let [file] = self.files.as_slice() {
            out.document(&file.content);
            return;
        }

        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.preformatted(&format!("// {}", file.path.display()));
            out.document(&file.content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::Captured;

    fn file(path: &str, content: &str) -> RenderedFile {
        RenderedFile {
            path: PathBuf::from(path),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_single_document_has_no_banner() {
        let report = RenderReport {
            files: vec![file("a/A.java", "package a;\n\npublic class A {\n}\n")],
        };
        let mut out = Captured::default();
        report.render(&mut out);
        assert_eq!(out.0, "package a;\n\npublic class A {\n}\n");
    }

    #[test]
    fn test_documents_separated_by_banners() {
        let report = RenderReport {
            files: vec![
                file("a/A.java", "public class A {\n}\n"),
                file("a/B.java", "public class B {\n}\n"),
            ],
        };
        let mut out = Captured::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            "// a/A.java\npublic class A {\n}\n\n// a/B.java\npublic class B {\n}\n"
        );
    }

    #[test]
    fn test_empty_report_prints_nothing() {
        let mut out = Captured::default();
        RenderReport { files: Vec::new() }.render(&mut out);
        assert!(out.0.is_empty());
    }
}
