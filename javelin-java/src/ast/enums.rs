//! Java enum builder.

use javelin_codegen::{Node, Writer};

use super::{
    Annotation, Class, Constructor, Field, Interface, Method, Modifier, Modifiers, TypeName,
    Visibility,
    annotations::write_annotation_lines,
    body::{Header, Members},
    constructors,
};

/// A constant of a Java enum, e.g. `ACTIVE("active")`.
///
/// The enum writes the separator after each constant: `,` between
/// constants and `;` after the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub doc: Option<String>,
    pub annotations: Vec<Annotation>,
    pub args: Vec<String>,
    pub methods: Vec<Method>,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
            args: Vec::new(),
            methods: Vec::new(),
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

    /// Add a constructor argument, written verbatim.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add a method to the constant's class body.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

impl Node for EnumConstant {
    fn write(&self, writer: &mut Writer) {
        if let Some(doc) = &self.doc {
            writer.write_doc(doc);
        }
        write_annotation_lines(writer, &self.annotations);
        writer.write_indent().write(&self.name);
        if !self.args.is_empty() {
            writer.write("(").write(&self.args.join(", ")).write(")");
        }
        if !self.methods.is_empty() {
            writer.write(" {").newline().indent();
            Members::new(writer).section(&self.methods);
            writer.dedent().write_indent().write("}");
        }
    }
}

/// Builder for Java enums.
///
/// Constants come first, followed by the same sections as a class:
/// fields, constructors, methods, nested classes, nested interfaces,
/// nested enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub doc: Option<String>,
    pub annotations: Vec<Annotation>,
    pub visibility: Visibility,
    pub modifiers: Modifiers,
    pub implements: Vec<TypeName>,
    pub constants: Vec<EnumConstant>,
    pub fields: Vec<Field>,
    pub constructors: Vec<Constructor>,
    pub methods: Vec<Method>,
    pub classes: Vec<Class>,
    pub interfaces: Vec<Interface>,
    pub enums: Vec<Enum>,
}

impl Enum {
    /// Create a public enum.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
            visibility: Visibility::Public,
            modifiers: Modifiers::new(),
            implements: Vec::new(),
            constants: Vec::new(),
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

    pub fn implements(mut self, interface: TypeName) -> Self {
        self.implements.push(interface);
        self
    }

    pub fn constant(mut self, constant: EnumConstant) -> Self {
        self.constants.push(constant);
        self
    }

    /// Add a constant with no arguments.
    pub fn constant_named(self, name: impl Into<String>) -> Self {
        self.constant(EnumConstant::new(name))
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a constructor, naming it after this enum.
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

    fn has_members(&self) -> bool {
        !(self.fields.is_empty()
            && self.constructors.is_empty()
            && self.methods.is_empty()
            && self.classes.is_empty()
            && self.interfaces.is_empty()
            && self.enums.is_empty())
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        super::build_node(self)
    }
}

impl Node for Enum {
    fn write(&self, writer: &mut Writer) {
        Header {
            doc: self.doc.as_deref(),
            annotations: &self.annotations,
            visibility: self.visibility,
            modifiers: &self.modifiers,
            keyword: "enum",
            name: &self.name,
            type_params: &[],
        }
        .write_open(writer);

        if !self.implements.is_empty() {
            writer.write(" implements ").write_joined(&self.implements, ", ");
        }
        writer.write(" {").newline().indent();

        let last = self.constants.len().saturating_sub(1);
        for (i, constant) in self.constants.iter().enumerate() {
            writer
                .write_node(constant)
                .write(if i == last { ";" } else { "," })
                .newline();
        }
        // Body declarations need the `;` even when there are no constants.
        if self.constants.is_empty() && self.has_members() {
            writer.write_line(";");
        }

        let written = usize::from(!self.constants.is_empty() || self.has_members());
        Members::after(writer, written)
            .section(&self.fields)
            .section(&constructors::owned(&self.constructors, &self.name))
            .section(&self.methods)
            .section(&self.classes)
            .section(&self.interfaces)
            .section(&self.enums);

        writer.dedent().write_line("}");
    }
}
