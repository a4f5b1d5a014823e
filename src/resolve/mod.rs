//! Per-page resolution and whole-document assembly.

mod document;
mod options;
mod page;

pub use document::DocumentResolver;
pub use options::ResolveOptions;
pub use page::PageTextResolver;
