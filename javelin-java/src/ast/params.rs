//! Method and constructor parameters.

use javelin_codegen::{Node, Writer};

use super::{Annotation, TypeName};

/// A parameter of a method or constructor.
///
/// A parameter's `doc` is not written inline; the owning method or
/// constructor turns it into an `@param` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeName,
    pub doc: Option<String>,
    pub annotations: Vec<Annotation>,
    pub is_final: bool,
    pub is_varargs: bool,
}

impl Parameter {
    pub fn new(ty: TypeName, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
            annotations: Vec::new(),
            is_final: false,
            is_varargs: false,
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

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Render as `Type... name`.
    pub fn varargs(mut self) -> Self {
        self.is_varargs = true;
        self
    }
}

impl Node for Parameter {
    fn write(&self, writer: &mut Writer) {
        for annotation in &self.annotations {
            writer.write_node(annotation).write(" ");
        }
        if self.is_final {
            writer.write("final ");
        }
        writer.write_node(&self.ty);
        if self.is_varargs {
            writer.write("...");
        }
        writer.write(" ").write(&self.name);
    }
}

/// `(a, b)` followed by ` throws X, Y` when `throws` is non-empty.
pub(crate) fn write_parameter_list(
    writer: &mut Writer,
    params: &[Parameter],
    throws: &[TypeName],
) {
    writer.write("(").write_joined(params, ", ").write(")");
    if !throws.is_empty() {
        writer.write(" throws ").write_joined(throws, ", ");
    }
}

/// `@param` tags for every documented parameter.
pub(crate) fn param_tags(params: &[Parameter]) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|p| p.doc.as_ref().map(|doc| (p.name.clone(), doc.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(node: &impl Node) -> String {
        let mut writer = Writer::nested("p");
        writer.write_node(node);
        writer.body().to_string()
    }

    #[test]
    fn test_plain_parameter() {
        assert_eq!(text(&Parameter::new(TypeName::int(), "count")), "int count");
    }

    #[test]
    fn test_annotated_final_varargs() {
        let p = Parameter::new(TypeName::string(), "names")
            .annotation(Annotation::named("Nonnull"))
            .final_()
            .varargs();
        assert_eq!(text(&p), "@Nonnull final String... names");
    }

    #[test]
    fn test_parameter_list_with_throws() {
        let mut writer = Writer::nested("p");
        write_parameter_list(
            &mut writer,
            &[
                Parameter::new(TypeName::int(), "a"),
                Parameter::new(TypeName::int(), "b"),
            ],
            &[TypeName::qualified("java.io.IOException")],
        );
        assert_eq!(writer.body(), "(int a, int b) throws IOException");
        assert_eq!(writer.imports(), vec!["java.io.IOException"]);
    }

    #[test]
    fn test_param_tags_skip_undocumented() {
        let params = [
            Parameter::new(TypeName::int(), "a").doc("first"),
            Parameter::new(TypeName::int(), "b"),
        ];
        assert_eq!(param_tags(&params), vec![("a".to_string(), "first".to_string())]);
    }
}
