//! Java interface builder.

use javelin_codegen::{Node, Writer};

use super::{
    Annotation, Class, Enum, Field, Method, Modifier, Modifiers, TypeName, TypeParam, Visibility,
    body::{Header, Members},
};

/// Builder for Java interfaces.
///
/// Sections: constants, methods, nested classes, nested interfaces, nested
/// enums. Interface members are written exactly as configured, so
/// constants usually carry no visibility and abstract methods no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub doc: Option<String>,
    pub annotations: Vec<Annotation>,
    pub visibility: Visibility,
    pub modifiers: Modifiers,
    pub type_params: Vec<TypeParam>,
    pub extends: Vec<TypeName>,
    pub constants: Vec<Field>,
    pub methods: Vec<Method>,
    pub classes: Vec<Class>,
    pub interfaces: Vec<Interface>,
    pub enums: Vec<Enum>,
}

impl Interface {
    /// Create a public interface.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
            visibility: Visibility::Public,
            modifiers: Modifiers::new(),
            type_params: Vec::new(),
            extends: Vec::new(),
            constants: Vec::new(),
            methods: Vec::new(),
            classes: Vec::new(),
            interfaces: Vec::new(),
            enums: Vec::new(),
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

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    pub fn extends(mut self, interface: TypeName) -> Self {
        self.extends.push(interface);
        self
    }

    /// Add a constant. Interface fields are implicitly `public static final`,
    /// so any access keyword on `constant` is dropped.
    pub fn constant(mut self, constant: Field) -> Self {
        self.constants.push(constant.visibility(Visibility::PackagePrivate));
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn nested_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub fn nested_interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn nested_enum(mut self, nested: Enum) -> Self {
        self.enums.push(nested);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        super::build_node(self)
    }
}

impl Node for Interface {
    fn write(&self, writer: &mut Writer) {
        Header {
            doc: self.doc.as_deref(),
            annotations: &self.annotations,
            visibility: self.visibility,
            modifiers: &self.modifiers,
            keyword: "interface",
            name: &self.name,
            type_params: &self.type_params,
        }
        .write_open(writer);

        if !self.extends.is_empty() {
            writer.write(" extends ").write_joined(&self.extends, ", ");
        }
        writer.write(" {").newline().indent();

        Members::new(writer)
            .section(&self.constants)
            .section(&self.methods)
            .section(&self.classes)
            .section(&self.interfaces)
            .section(&self.enums);

        writer.dedent().write_line("}");
    }
}
