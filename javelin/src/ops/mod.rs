//! Core operations.
//!
//! The work behind each command, kept apart from argument parsing and from
//! how reports are printed.

pub mod check;
pub mod render;

pub use check::check;
pub use render::render;
