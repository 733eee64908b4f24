//! Java method builder.

use javelin_codegen::{Node, Writer};

use super::{
    Annotation, CodeBlock, Javadoc, Modifier, Modifiers, Parameter, TypeName, TypeParam,
    Visibility,
    annotations::write_annotation_lines,
    params::{param_tags, write_parameter_list},
    types::write_type_params,
};

/// Builder for Java methods.
///
/// A method without a body is written as a declaration ending in `;`,
/// which is what abstract and interface methods need. Give it a body
/// (possibly empty) to get a `{ ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub doc: Option<String>,
    pub return_doc: Option<String>,
    pub annotations: Vec<Annotation>,
    pub visibility: Visibility,
    pub modifiers: Modifiers,
    pub type_params: Vec<TypeParam>,
    pub returns: TypeName,
    pub params: Vec<Parameter>,
    pub throws: Vec<TypeName>,
    pub body: Option<CodeBlock>,
}

impl Method {
    /// Create a public `void` method without a body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            return_doc: None,
            annotations: Vec::new(),
            visibility: Visibility::Public,
            modifiers: Modifiers::new(),
            type_params: Vec::new(),
            returns: TypeName::void(),
            params: Vec::new(),
            throws: Vec::new(),
            body: None,
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

    pub fn private(self) -> Self {
        self.visibility(Visibility::Private)
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn static_(self) -> Self {
        self.modifier(Modifier::Static)
    }

    /// Mark abstract. Any body is dropped.
    pub fn abstract_(mut self) -> Self {
        self.body = None;
        self.modifier(Modifier::Abstract)
    }

    pub fn type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    pub fn returns(mut self, ty: TypeName) -> Self {
        self.returns = ty;
        self
    }

    /// Document the return value with an `@return` tag.
    pub fn returns_doc(mut self, doc: impl Into<String>) -> Self {
        self.return_doc = Some(doc.into());
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn throws(mut self, ty: TypeName) -> Self {
        self.throws.push(ty);
        self
    }

    pub fn body(mut self, body: CodeBlock) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a line to the body, creating the body if needed.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        let body = self.body.take().unwrap_or_default();
        self.body = Some(body.line(line));
        self
    }

    fn javadoc(&self) -> Javadoc {
        Javadoc {
            text: self.doc.clone(),
            params: param_tags(&self.params),
            returns: self.return_doc.clone(),
            throws: Vec::new(),
        }
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        super::build_node(self)
    }
}

impl Node for Method {
    fn write(&self, writer: &mut Writer) {
        writer.write_node(&self.javadoc());
        write_annotation_lines(writer, &self.annotations);

        writer
            .write_indent()
            .write_node(&self.visibility)
            .write_node(&self.modifiers);
        if !self.type_params.is_empty() {
            write_type_params(writer, &self.type_params);
            writer.write(" ");
        }
        writer
            .write_node(&self.returns)
            .write(" ")
            .write(&self.name);
        write_parameter_list(writer, &self.params, &self.throws);

        match &self.body {
            Some(body) => {
                writer.write(" {").newline().indent().write_node(body).dedent();
                writer.write_line("}");
            }
            None => {
                writer.write(";").newline();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeRef;

    #[test]
    fn test_abstract_declaration() {
        let m = Method::new("run").abstract_().build();
        assert_eq!(m, "public abstract void run();\n");
    }

    #[test]
    fn test_method_with_body() {
        let m = Method::new("add")
            .returns(TypeName::int())
            .param(Parameter::new(TypeName::int(), "a"))
            .param(Parameter::new(TypeName::int(), "b"))
            .body_line("return a + b;")
            .build();
        assert_eq!(m, "public int add(int a, int b) {\n    return a + b;\n}\n");
    }

    #[test]
    fn test_empty_body() {
        let m = Method::new("noop").body(CodeBlock::new()).build();
        assert_eq!(m, "public void noop() {\n}\n");
    }

    #[test]
    fn test_generic_static_method() {
        let m = Method::new("firstOf")
            .static_()
            .type_param(TypeParam::new("T"))
            .returns(TypeName::variable("T"))
            .param(Parameter::new(
                TypeName::parameterized(
                    TypeRef::new("List", "java.util"),
                    [TypeName::variable("T")],
                ),
                "items",
            ))
            .body_line("return items.get(0);")
            .build();
        assert_eq!(
            m,
            "import java.util.List;\n\npublic static <T> T firstOf(List<T> items) {\n    return items.get(0);\n}\n"
        );
    }

    #[test]
    fn test_doc_with_param_and_return_tags() {
        let m = Method::new("find")
            .doc("Looks up a user.")
            .returns(TypeName::string())
            .returns_doc("the user name")
            .param(Parameter::new(TypeName::long(), "id").doc("the user id"))
            .throws(TypeName::qualified("java.io.IOException"))
            .annotation(Annotation::override_())
            .body_line("return store.get(id);")
            .build();
        assert_eq!(
            m,
            "import java.io.IOException;\n\n\
             /**\n * Looks up a user.\n *\n * @param id the user id\n * @return the user name\n */\n\
             @Override\n\
             public String find(long id) throws IOException {\n    return store.get(id);\n}\n"
        );
    }

    #[test]
    fn test_abstract_drops_body() {
        let m = Method::new("close").body_line("x();").abstract_();
        assert!(m.body.is_none());
    }
}
