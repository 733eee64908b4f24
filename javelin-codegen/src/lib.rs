//! Emission engine for generated Java source.
//!
//! This crate owns the pieces every Java construct funnels through:
//! an indentation-aware [`Writer`](builder::Writer), the [`Node`](builder::Node)
//! capability implemented by each construct, the [`TypeRef`](builder::TypeRef)
//! identity used to derive imports, and the import registry that resolves
//! them at render time.
//!
//! # Module Organization
//!
//! - [`builder`] - Writer, Node, TypeRef and Indent
//! - [`generation`] - Import bookkeeping (ImportSet)
//! - [`error`] - Errors reported by strict rendering

pub mod builder;
pub mod error;
pub mod generation;

pub use builder::{Indent, Node, TypeRef, Writer};
pub use error::{Error, Result};
pub use generation::ImportSet;
