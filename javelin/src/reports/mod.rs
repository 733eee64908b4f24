//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`] target.

mod check;
mod output;
mod render;

pub use check::{CheckReport, TypeSummary};
pub use output::{Report, TerminalOutput};
pub use render::{RenderReport, RenderedFile};
