//! Java AST builders for generating types and their members.
//!
//! These provide a high-level API for constructing Java syntax, which is
//! then written through a [`Writer`](javelin_codegen::Writer).

mod annotations;
mod body;
mod classes;
mod code;
mod constructors;
mod docs;
mod enums;
mod fields;
mod interfaces;
mod methods;
mod modifiers;
mod params;
mod type_decl;
mod types;

pub use annotations::Annotation;
pub use classes::Class;
pub use code::{CodeBlock, Statement};
pub use constructors::{Constructor, Delegation};
pub use docs::Javadoc;
pub use enums::{Enum, EnumConstant};
pub use fields::Field;
pub use interfaces::Interface;
pub use methods::Method;
pub use modifiers::{Modifier, Modifiers, Visibility};
pub use params::Parameter;
pub use type_decl::TypeDecl;
pub use types::{TypeName, TypeParam, WildcardBound};

use javelin_codegen::{Node, Writer};

/// Render a construct on its own, for previews and tests.
///
/// Uses a package-less nested writer, so every qualified reference shows
/// up in the import block above the body.
pub(crate) fn build_node(node: &impl Node) -> String {
    let mut writer = Writer::nested("");
    writer.write_node(node);
    writer.render()
}
