//! Java construct builders for javelin.
//!
//! Every construct in [`ast`] is a plain data holder with a consuming
//! builder API and a [`Node`](javelin_codegen::Node) implementation.
//! [`JavaFile`] ties a package, explicit imports and one top-level type
//! together and renders the finished compilation unit.

pub mod ast;
mod java_file;

pub use ast::{
    Annotation, Class, CodeBlock, Constructor, Delegation, Enum, EnumConstant, Field, Interface,
    Javadoc, Method, Modifier, Modifiers, Parameter, Statement, TypeDecl, TypeName, TypeParam,
    Visibility, WildcardBound,
};
pub use java_file::JavaFile;
pub use javelin_codegen::{Indent, Node, TypeRef, Writer};
