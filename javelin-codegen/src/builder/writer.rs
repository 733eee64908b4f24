//! The emission context threaded through one render.

use tracing::{debug, trace};

use super::{Indent, Node, TypeRef};
use crate::{Error, Result, generation::ImportSet};

/// Mutable emission context for a single Java document.
///
/// A `Writer` collects the body text of one render while constructs are
/// written into it, together with every import they ask for. Imports are
/// only resolved by [`Writer::render`], once the whole tree has been
/// visited: explicit imports and type references are merged, references
/// into the writer's own package are dropped, and the rest is sorted and
/// placed above the body.
///
/// # Example
///
/// ```
/// use javelin_codegen::{TypeRef, Writer};
///
/// let mut writer = Writer::new("com.example");
/// writer
///     .write_line("public class Files {")
///     .indent()
///     .write_indent()
///     .write("private ")
///     .write_node(&TypeRef::new("File", "java.io"))
///     .write(" root;")
///     .newline()
///     .dedent()
///     .write_line("}");
///
/// assert_eq!(
///     writer.render(),
///     "package com.example;\n\nimport java.io.File;\n\npublic class Files {\n    private File root;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    buffer: String,
    indent_level: usize,
    indent: Indent,
    package: String,
    emit_package: bool,
    explicit_imports: ImportSet,
    type_references: ImportSet,
}

impl Writer {
    /// Create a writer for a top-level file in `package`.
    ///
    /// The rendered document starts with the `package` declaration.
    pub fn new(package: impl Into<String>) -> Self {
        Self::with_package_line(package.into(), true)
    }

    /// Create a writer whose output shares an enclosing file.
    ///
    /// Same-package suppression still applies, but no `package` line is
    /// rendered.
    pub fn nested(package: impl Into<String>) -> Self {
        Self::with_package_line(package.into(), false)
    }

    fn with_package_line(package: String, emit_package: bool) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent: Indent::default(),
            package,
            emit_package,
            explicit_imports: ImportSet::new(),
            type_references: ImportSet::new(),
        }
    }

    /// Use a different indentation unit.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    // =========================================================================
    // Text primitives
    // =========================================================================

    /// Append text verbatim, without indentation or newline.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Append a line at the current indentation.
    ///
    /// An empty `text` writes a bare newline, so blank lines never carry
    /// trailing indentation.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.write_indent();
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Terminate the current line.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append a bare newline on top of whatever precedes it.
    pub fn blank_line(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append a newline unless the buffer is empty or already ends in one.
    pub fn ensure_trailing_newline(&mut self) -> &mut Self {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self
    }

    /// Append only the indentation prefix for the current depth.
    ///
    /// Used to start a line that is assembled from several `write` and
    /// `write_node` calls.
    pub fn write_indent(&mut self) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level. A no-op at depth zero.
    pub fn dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Write a node into this writer.
    pub fn write_node<N: Node + ?Sized>(&mut self, node: &N) -> &mut Self {
        node.write(self);
        self
    }

    /// Write nodes inline, separated by `separator`.
    pub fn write_joined<'a, N, I>(&mut self, nodes: I, separator: &str) -> &mut Self
    where
        N: Node + 'a,
        I: IntoIterator<Item = &'a N>,
    {
        for (i, node) in nodes.into_iter().enumerate() {
            if i > 0 {
                self.buffer.push_str(separator);
            }
            node.write(self);
        }
        self
    }

    /// Write a `/** ... */` comment, one ` * ` line per line of `text`.
    pub fn write_doc(&mut self, text: &str) -> &mut Self {
        self.write_line("/**");
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.write_line(" *");
            } else {
                self.write_line(&format!(" * {}", line));
            }
        }
        self.write_line(" */")
    }

    /// Write `header`, an indented body, and a closing `}` line.
    ///
    /// # Example
    ///
    /// ```
    /// use javelin_codegen::Writer;
    ///
    /// let mut writer = Writer::nested("com.example");
    /// writer.block("static {", |w| {
    ///     w.write_line("init();");
    /// });
    /// assert_eq!(writer.body(), "static {\n    init();\n}\n");
    /// ```
    pub fn block<F>(&mut self, header: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.write_line(header).indent();
        f(self);
        self.dedent().write_line("}")
    }

    // =========================================================================
    // Import registries
    // =========================================================================

    /// Request an import by fully-qualified name.
    pub fn add_import(&mut self, qualified: impl Into<String>) -> &mut Self {
        self.explicit_imports.insert(qualified);
        self
    }

    /// Register a type mentioned by the emitted code.
    ///
    /// References into the writer's own package, and into the default
    /// package, are dropped.
    pub fn add_reference(&mut self, type_ref: &TypeRef) -> &mut Self {
        if type_ref.package() == self.package || type_ref.package().is_empty() {
            trace!(reference = %type_ref, "skipping same-package reference");
            return self;
        }
        self.type_references.insert(type_ref.qualified_name());
        self
    }

    /// The resolved import list: deduplicated and sorted ascending.
    pub fn imports(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .explicit_imports
            .iter()
            .chain(self.type_references.iter())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    // =========================================================================
    // Accessors and rendering
    // =========================================================================

    /// The target package fixed at construction.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Current nesting depth.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// The body text written so far, without package or imports.
    pub fn body(&self) -> &str {
        &self.buffer
    }

    /// Assemble the package line, the import block and the body.
    pub fn render(&self) -> String {
        let imports = self.imports();
        let mut out = String::with_capacity(self.buffer.len() + imports.len() * 32 + 64);

        if self.emit_package && !self.package.is_empty() {
            out.push_str("package ");
            out.push_str(&self.package);
            out.push_str(";\n\n");
        }

        for name in &imports {
            out.push_str("import ");
            out.push_str(name);
            out.push_str(";\n");
        }
        if !imports.is_empty() {
            out.push('\n');
        }

        out.push_str(&self.buffer);

        debug!(
            package = %self.package,
            imports = imports.len(),
            bytes = out.len(),
            "rendered document"
        );
        out
    }

    /// Render, rejecting output whose indentation was left open.
    pub fn finish(self) -> Result<String> {
        if self.indent_level != 0 {
            return Err(Error::UnbalancedIndent {
                depth: self.indent_level,
            });
        }
        Ok(self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array_list() -> TypeRef {
        TypeRef::new("ArrayList", "java.util")
    }

    #[test]
    fn test_empty_document_is_package_line() {
        let writer = Writer::new("com.example");
        assert_eq!(writer.render(), "package com.example;\n\n");
    }

    #[test]
    fn test_nested_writer_suppresses_package() {
        let mut writer = Writer::nested("com.example");
        writer.write_line("class A {}");
        assert_eq!(writer.render(), "class A {}\n");
    }

    #[test]
    fn test_default_package_has_no_package_line() {
        let mut writer = Writer::new("");
        writer.write_line("class A {}");
        assert_eq!(writer.render(), "class A {}\n");
    }

    #[test]
    fn test_write_is_verbatim() {
        let mut writer = Writer::nested("p");
        writer.indent().write("a").write("b");
        assert_eq!(writer.body(), "ab");
    }

    #[test]
    fn test_write_line_indents() {
        let mut writer = Writer::nested("p");
        writer
            .write_line("class A {")
            .indent()
            .write_line("int x;")
            .dedent()
            .write_line("}");
        assert_eq!(writer.body(), "class A {\n    int x;\n}\n");
    }

    #[test]
    fn test_empty_write_line_has_no_trailing_indent() {
        let mut writer = Writer::nested("p");
        writer.indent().write_line("");
        assert_eq!(writer.body(), "\n");
    }

    #[test]
    fn test_custom_indent() {
        let mut writer = Writer::nested("p").with_indent(Indent::Tab);
        writer.indent().indent().write_line("x;");
        assert_eq!(writer.body(), "\t\tx;\n");
    }

    #[test]
    fn test_blank_line_stacks() {
        let mut writer = Writer::nested("p");
        writer.write_line("a").blank_line().blank_line();
        assert_eq!(writer.body(), "a\n\n\n");
    }

    #[test]
    fn test_ensure_trailing_newline_is_idempotent() {
        let mut once = Writer::nested("p");
        once.write("a").ensure_trailing_newline();

        let mut twice = Writer::nested("p");
        twice
            .write("a")
            .ensure_trailing_newline()
            .ensure_trailing_newline();

        assert_eq!(once.body(), "a\n");
        assert_eq!(once.body(), twice.body());
    }

    #[test]
    fn test_ensure_trailing_newline_on_empty_buffer() {
        let mut writer = Writer::nested("p");
        writer.ensure_trailing_newline();
        assert_eq!(writer.body(), "");
    }

    #[test]
    fn test_dedent_floor() {
        let mut writer = Writer::nested("p");
        writer.dedent().dedent();
        assert_eq!(writer.indent_level(), 0);
        writer.indent().dedent().dedent();
        assert_eq!(writer.indent_level(), 0);
    }

    #[test]
    fn test_reference_dedup_with_explicit_import() {
        let mut writer = Writer::new("com.example");
        writer
            .add_reference(&array_list())
            .add_reference(&array_list())
            .add_import("java.util.ArrayList");
        assert_eq!(
            writer.render(),
            "package com.example;\n\nimport java.util.ArrayList;\n\n"
        );
    }

    #[test]
    fn test_explicit_import_dedup() {
        let mut writer = Writer::nested("com.example");
        for _ in 0..3 {
            writer.add_import("javax.annotation.Nonnull");
        }
        assert_eq!(writer.imports(), vec!["javax.annotation.Nonnull"]);
    }

    #[test]
    fn test_same_package_reference_suppressed() {
        let mut writer = Writer::new("com.example");
        for _ in 0..5 {
            writer.add_reference(&TypeRef::new("Sibling", "com.example"));
        }
        assert!(writer.imports().is_empty());
        assert_eq!(writer.render(), "package com.example;\n\n");
    }

    #[test]
    fn test_subpackage_reference_is_imported() {
        let mut writer = Writer::nested("com.example");
        writer.add_reference(&TypeRef::new("Parent", "com.example.parent"));
        assert_eq!(writer.imports(), vec!["com.example.parent.Parent"]);
    }

    #[test]
    fn test_default_package_reference_dropped() {
        let mut writer = Writer::nested("com.example");
        writer.add_reference(&TypeRef::parse("Loose"));
        assert!(writer.imports().is_empty());
    }

    #[test]
    fn test_imports_sorted() {
        let mut writer = Writer::new("com.example");
        writer
            .add_reference(&TypeRef::new("HttpServletRequest", "javax.servlet.http"))
            .add_reference(&TypeRef::new("List", "java.util"))
            .add_reference(&TypeRef::new("File", "java.io"));
        writer.write_line("class A {}");
        assert_eq!(
            writer.render(),
            "package com.example;\n\n\
             import java.io.File;\n\
             import java.util.List;\n\
             import javax.servlet.http.HttpServletRequest;\n\
             \n\
             class A {}\n"
        );
    }

    #[test]
    fn test_no_import_block_blank_line_when_empty() {
        let mut writer = Writer::nested("com.example");
        writer.write_line("class A {}");
        assert!(!writer.render().starts_with('\n'));
    }

    #[test]
    fn test_write_doc() {
        let mut writer = Writer::nested("p");
        writer.indent().write_doc("First line.\n\nSecond line.");
        assert_eq!(
            writer.body(),
            "    /**\n     * First line.\n     *\n     * Second line.\n     */\n"
        );
    }

    #[test]
    fn test_write_joined() {
        let refs = [
            TypeRef::new("Closeable", "java.io"),
            TypeRef::new("Serializable", "java.io"),
        ];
        let mut writer = Writer::nested("p");
        writer.write_joined(&refs, ", ");
        assert_eq!(writer.body(), "Closeable, Serializable");
        assert_eq!(writer.imports(), vec!["java.io.Closeable", "java.io.Serializable"]);
    }

    #[test]
    fn test_finish_balanced() {
        let mut writer = Writer::nested("p");
        writer.block("class A {", |w| {
            w.write_line("int x;");
        });
        assert_eq!(writer.finish(), Ok("class A {\n    int x;\n}\n".to_string()));
    }

    #[test]
    fn test_finish_unbalanced() {
        let mut writer = Writer::nested("p");
        writer.indent().indent();
        assert_eq!(writer.finish(), Err(Error::UnbalancedIndent { depth: 2 }));
    }
}
