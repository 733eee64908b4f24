//! Import bookkeeping for generated files.

mod imports;

pub use imports::ImportSet;
