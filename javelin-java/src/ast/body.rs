//! Shared layout of type declarations.

use javelin_codegen::{Node, Writer};

use super::{
    Annotation, Modifiers, TypeParam, Visibility, annotations::write_annotation_lines,
    types::write_type_params,
};

/// Writes member sections with exactly one blank line between consecutive
/// members, whether they share a section or not. Empty sections write
/// nothing.
pub(crate) struct Members<'w> {
    writer: &'w mut Writer,
    written: usize,
}

impl<'w> Members<'w> {
    pub(crate) fn new(writer: &'w mut Writer) -> Self {
        Self { writer, written: 0 }
    }

    /// Continue after members the caller already wrote.
    pub(crate) fn after(writer: &'w mut Writer, written: usize) -> Self {
        Self { writer, written }
    }

    pub(crate) fn section<N: Node>(&mut self, members: &[N]) -> &mut Self {
        for member in members {
            if self.written > 0 {
                self.writer.blank_line();
            }
            self.writer.write_node(member);
            self.written += 1;
        }
        self
    }
}

/// The parts of a type declaration that precede its body.
pub(crate) struct Header<'a> {
    pub doc: Option<&'a str>,
    pub annotations: &'a [Annotation],
    pub visibility: Visibility,
    pub modifiers: &'a Modifiers,
    pub keyword: &'a str,
    pub name: &'a str,
    pub type_params: &'a [TypeParam],
}

impl Header<'_> {
    /// Write doc comment, annotations and the declaration line up to the
    /// type parameters. The caller finishes the line.
    pub(crate) fn write_open(&self, writer: &mut Writer) {
        if let Some(doc) = self.doc {
            writer.write_doc(doc);
        }
        write_annotation_lines(writer, self.annotations);
        writer
            .write_indent()
            .write_node(&self.visibility)
            .write_node(self.modifiers)
            .write(self.keyword)
            .write(" ")
            .write(self.name);
        write_type_params(writer, self.type_params);
    }
}
