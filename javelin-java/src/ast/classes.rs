//! Java class builder.

use javelin_codegen::{Node, Writer};
use tracing::trace;

use super::{
    Annotation, Constructor, Enum, Field, Interface, Method, Modifier, Modifiers, TypeName,
    TypeParam, Visibility,
    body::{Header, Members},
    constructors,
};

/// Builder for Java classes.
///
/// The body is written in a fixed section order: fields, constructors,
/// methods, nested classes, nested interfaces, nested enums. Members keep
/// insertion order within a section, and consecutive members are separated
/// by one blank line.
///
/// # Example
///
/// ```
/// use javelin_java::{Class, Field, TypeName, TypeRef};
///
/// let class = Class::new("Child")
///     .extends(TypeName::Class(TypeRef::new("Parent", "com.example.parent")))
///     .field(Field::new(TypeName::int(), "age"));
///
/// assert_eq!(
///     class.build(),
///     "import com.example.parent.Parent;\n\npublic class Child extends Parent {\n    private int age;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: String,
    pub doc: Option<String>,
    pub annotations: Vec<Annotation>,
    pub visibility: Visibility,
    pub modifiers: Modifiers,
    pub type_params: Vec<TypeParam>,
    pub extends: Option<TypeName>,
    pub implements: Vec<TypeName>,
    pub fields: Vec<Field>,
    pub constructors: Vec<Constructor>,
    pub methods: Vec<Method>,
    pub classes: Vec<Class>,
    pub interfaces: Vec<Interface>,
    pub enums: Vec<Enum>,
}

impl Class {
    /// Create a public class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
            visibility: Visibility::Public,
            modifiers: Modifiers::new(),
            type_params: Vec::new(),
            extends: None,
            implements: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
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

    pub fn abstract_(self) -> Self {
        self.modifier(Modifier::Abstract)
    }

    pub fn final_(self) -> Self {
        self.modifier(Modifier::Final)
    }

    pub fn static_(self) -> Self {
        self.modifier(Modifier::Static)
    }

    pub fn type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    pub fn extends(mut self, superclass: TypeName) -> Self {
        self.extends = Some(superclass);
        self
    }

    pub fn implements(mut self, interface: TypeName) -> Self {
        self.implements.push(interface);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a constructor, naming it after this class.
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        let constructor = constructor.named(self.name.clone());
        self.constructors.push(constructor);
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

    /// Build the class as a string.
    pub fn build(&self) -> String {
        super::build_node(self)
    }
}

impl Node for Class {
    fn write(&self, writer: &mut Writer) {
        trace!(class = %self.name, depth = writer.indent_level(), "writing class");

        Header {
            doc: self.doc.as_deref(),
            annotations: &self.annotations,
            visibility: self.visibility,
            modifiers: &self.modifiers,
            keyword: "class",
            name: &self.name,
            type_params: &self.type_params,
        }
        .write_open(writer);

        if let Some(superclass) = &self.extends {
            writer.write(" extends ").write_node(superclass);
        }
        if !self.implements.is_empty() {
            writer.write(" implements ").write_joined(&self.implements, ", ");
        }
        writer.write(" {").newline().indent();

        Members::new(writer)
            .section(&self.fields)
            .section(&constructors::owned(&self.constructors, &self.name))
            .section(&self.methods)
            .section(&self.classes)
            .section(&self.interfaces)
            .section(&self.enums);

        writer.dedent().write_line("}");
    }
}
