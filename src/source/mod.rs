//! Page sources: the injected seam for PDF decoding and rasterization.

use image::DynamicImage;

use crate::error::Result;
use crate::model::TextBlock;

#[cfg(feature = "pdfium")]
mod pdfium;

#[cfg(feature = "pdfium")]
pub use pdfium::PdfiumSource;

/// A source of document pages.
///
/// Implementations wrap an actual PDF backend; the resolver only ever sees
/// positioned text blocks and rasterized page images through this trait, so
/// tests can substitute an in-memory fake.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<usize>;

    /// Positioned selectable-text blocks for a page (0-indexed), in whatever
    /// order the backend yields them. The resolver sorts by `(top, left)`.
    fn text_blocks(&self, index: usize) -> Result<Vec<TextBlock>>;

    /// Rasterize a page (0-indexed) at the given DPI.
    fn rasterize(&self, index: usize, dpi: u32) -> Result<DynamicImage>;
}
