//! Java field builder.

use javelin_codegen::{Node, Writer};

use super::{
    Annotation, Modifier, Modifiers, TypeName, Visibility, annotations::write_annotation_lines,
};

/// A field of a class, interface or enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeName,
    pub doc: Option<String>,
    pub annotations: Vec<Annotation>,
    pub visibility: Visibility,
    pub modifiers: Modifiers,
    pub initializer: Option<String>,
}

impl Field {
    /// Create a private field.
    pub fn new(ty: TypeName, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
            annotations: Vec::new(),
            visibility: Visibility::Private,
            modifiers: Modifiers::new(),
            initializer: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn public(self) -> Self {
        self.visibility(Visibility::Public)
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn final_(self) -> Self {
        self.modifier(Modifier::Final)
    }

    pub fn static_(self) -> Self {
        self.modifier(Modifier::Static)
    }

    /// Set the initializer expression, written verbatim after ` = `.
    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    /// Build the field as a string.
    pub fn build(&self) -> String {
        super::build_node(self)
    }
}

impl Node for Field {
    fn write(&self, writer: &mut Writer) {
        if let Some(doc) = &self.doc {
            writer.write_doc(doc);
        }
        write_annotation_lines(writer, &self.annotations);

        writer
            .write_indent()
            .write_node(&self.visibility)
            .write_node(&self.modifiers)
            .write_node(&self.ty)
            .write(" ")
            .write(&self.name);
        if let Some(init) = &self.initializer {
            writer.write(" = ").write(init);
        }
        writer.write(";").newline();
    }
}
