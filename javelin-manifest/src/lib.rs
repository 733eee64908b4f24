// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Manifest layer for javelin.
//!
//! A `javelin.toml` (or `.json`) describes a package and the types to
//! generate in it. [`Manifest`] parses and validates that description and
//! lowers every top-level type into a [`javelin_java::JavaFile`].

mod decl;
mod error;
mod lower;
mod manifest;
mod type_syntax;

pub use decl::{
    AnnotationDef, ConstantDef, ConstructorDef, FieldDef, IndentSetting, MethodDef, OneOrMany,
    ParamDef, TypeDef, TypeKind,
};
pub use error::{Error, Result, SourceContext};
pub use manifest::{Manifest, ParseContext};
