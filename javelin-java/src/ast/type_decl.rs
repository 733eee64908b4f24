//! Top-level type declarations.

use javelin_codegen::{Node, Writer};

use super::{Class, Enum, Interface};

/// The type declared by a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
    Class(Class),
    Interface(Interface),
    Enum(Enum),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(c) => &c.name,
            Self::Interface(i) => &i.name,
            Self::Enum(e) => &e.name,
        }
    }

    /// The Java keyword introducing this declaration.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class(_) => "class",
            Self::Interface(_) => "interface",
            Self::Enum(_) => "enum",
        }
    }
}

impl Node for TypeDecl {
    fn write(&self, writer: &mut Writer) {
        match self {
            Self::Class(c) => writer.write_node(c),
            Self::Interface(i) => writer.write_node(i),
            Self::Enum(e) => writer.write_node(e),
        };
    }
}

impl From<Class> for TypeDecl {
    fn from(c: Class) -> Self {
        Self::Class(c)
    }
}

impl From<Interface> for TypeDecl {
    fn from(i: Interface) -> Self {
        Self::Interface(i)
    }
}

impl From<Enum> for TypeDecl {
    fn from(e: Enum) -> Self {
        Self::Enum(e)
    }
}
