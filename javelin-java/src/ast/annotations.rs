//! Java annotation builder.

use javelin_codegen::{Node, TypeRef, Writer};

use super::TypeName;

/// An annotation such as `@Override`, `@SuppressWarnings("unchecked")` or
/// `@Column(name = "id", nullable = false)`.
///
/// Argument values are written verbatim, so string values carry their own
/// quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    ty: TypeName,
    value: Option<String>,
    members: Vec<(String, String)>,
}

impl Annotation {
    /// An annotation whose type is imported unless it is in the target package.
    pub fn new(ty: TypeRef) -> Self {
        Self::from_type(TypeName::Class(ty))
    }

    /// An annotation written by simple name only, e.g. `Override`.
    ///
    /// Pair with [`Writer::add_import`] when the type still needs an import.
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_type(TypeName::Builtin(name.into()))
    }

    fn from_type(ty: TypeName) -> Self {
        Self {
            ty,
            value: None,
            members: Vec::new(),
        }
    }

    /// `@Override`.
    pub fn override_() -> Self {
        Self::named("Override")
    }

    /// `@Deprecated`.
    pub fn deprecated() -> Self {
        Self::named("Deprecated")
    }

    /// Set the single unnamed value: `@Name(value)`.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Add a named member: `@Name(key = value)`. Members keep insertion order.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((name.into(), value.into()));
        self
    }

    /// Build the annotation as a string.
    pub fn build(&self) -> String {
        super::build_node(self)
    }
}

impl Node for Annotation {
    fn write(&self, writer: &mut Writer) {
        writer.write("@").write_node(&self.ty);
        if !self.members.is_empty() {
            writer.write("(");
            for (i, (name, value)) in self.members.iter().enumerate() {
                if i > 0 {
                    writer.write(", ");
                }
                writer.write(name).write(" = ").write(value);
            }
            writer.write(")");
        } else if let Some(value) = &self.value {
            writer.write("(").write(value).write(")");
        }
    }
}

/// Write each annotation on its own line at the current indentation.
pub(crate) fn write_annotation_lines(writer: &mut Writer, annotations: &[Annotation]) {
    for annotation in annotations {
        writer.write_indent().write_node(annotation).newline();
    }
}
