//! Java constructor builder.

use javelin_codegen::{Node, Writer};

use super::{
    Annotation, CodeBlock, Javadoc, Parameter, TypeName, Visibility,
    annotations::write_annotation_lines,
    params::{param_tags, write_parameter_list},
};

/// The first statement of a constructor that hands off to another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delegation {
    /// `super(args);`
    Super(Vec<String>),
    /// `this(args);`
    This(Vec<String>),
}

impl Node for Delegation {
    fn write(&self, writer: &mut Writer) {
        let (keyword, args) = match self {
            Self::Super(args) => ("super", args),
            Self::This(args) => ("this", args),
        };
        writer.write_line(&format!("{}({});", keyword, args.join(", ")));
    }
}

/// Builder for Java constructors.
///
/// The constructor's name is the enclosing type's name; [`Class`](super::Class)
/// and [`Enum`](super::Enum) write their own name in its place, so `name`
/// only matters when the constructor is rendered on its own.
/// A constructor holds at most one [`Delegation`]: setting `super` and then
/// `this` keeps only the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub name: String,
    pub doc: Option<String>,
    pub annotations: Vec<Annotation>,
    pub visibility: Visibility,
    pub params: Vec<Parameter>,
    pub throws: Vec<TypeName>,
    pub delegation: Option<Delegation>,
    pub body: CodeBlock,
}

impl Constructor {
    /// Create a public constructor.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            doc: None,
            annotations: Vec::new(),
            visibility: Visibility::Public,
            params: Vec::new(),
            throws: Vec::new(),
            delegation: None,
            body: CodeBlock::new(),
        }
    }

    /// Set the name explicitly, for use outside a `Class` or `Enum`.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
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

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn throws(mut self, ty: TypeName) -> Self {
        self.throws.push(ty);
        self
    }

    /// Start the body with `super(args);`.
    pub fn super_call(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.delegation = Some(Delegation::Super(args.into_iter().map(Into::into).collect()));
        self
    }

    /// Start the body with `this(args);`.
    pub fn this_call(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.delegation = Some(Delegation::This(args.into_iter().map(Into::into).collect()));
        self
    }

    pub fn body(mut self, body: CodeBlock) -> Self {
        self.body = body;
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body = self.body.line(line);
        self
    }

    /// The doc comment is written when the constructor has its own text or
    /// any parameter is documented.
    fn javadoc(&self) -> Javadoc {
        Javadoc {
            text: self.doc.clone(),
            params: param_tags(&self.params),
            returns: None,
            throws: Vec::new(),
        }
    }

    /// Build the constructor as a string.
    pub fn build(&self) -> String {
        super::build_node(self)
    }
}

impl Default for Constructor {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for Constructor {
    fn write(&self, writer: &mut Writer) {
        self.write_named(writer, &self.name);
    }
}

/// A constructor written under the name of the type that declares it.
pub(crate) struct OwnedConstructor<'a> {
    pub constructor: &'a Constructor,
    pub owner: &'a str,
}

/// Pair each constructor with its declaring type's name.
pub(crate) fn owned<'a>(
    constructors: &'a [Constructor],
    owner: &'a str,
) -> Vec<OwnedConstructor<'a>> {
    constructors
        .iter()
        .map(|constructor| OwnedConstructor { constructor, owner })
        .collect()
}

impl Node for OwnedConstructor<'_> {
    fn write(&self, writer: &mut Writer) {
        self.constructor.write_named(writer, self.owner);
    }
}

impl Constructor {
    fn write_named(&self, writer: &mut Writer, name: &str) {
        writer.write_node(&self.javadoc());
        write_annotation_lines(writer, &self.annotations);

        writer
            .write_indent()
            .write_node(&self.visibility)
            .write(name);
        write_parameter_list(writer, &self.params, &self.throws);
        writer.write(" {").newline().indent();

        if let Some(delegation) = &self.delegation {
            writer.write_node(delegation);
        }
        writer.write_node(&self.body).dedent().write_line("}");
    }
}
