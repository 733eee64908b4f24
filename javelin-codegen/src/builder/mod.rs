//! Emission building blocks.
//!
//! - [`Writer`] - Buffer, indentation and import registries for one render
//! - [`Node`] - Trait implemented by every emittable construct
//! - [`TypeRef`] - `(name, package)` identity of an external type
//! - [`Indent`] - Indentation configuration

mod indent;
mod node;
mod type_ref;
mod writer;

pub use indent::Indent;
pub use node::Node;
pub use type_ref::TypeRef;
pub use writer::Writer;
