//! # hantext
//!
//! Paragraph-structured text extraction from mixed-origin Korean PDF
//! documents: pages that carry selectable text are extracted directly, and
//! scanned pages fall back to OCR.
//!
//! The heart of the library is the text reconstruction pipeline in [`text`]:
//! noise cleaning, paragraph re-assembly from ragged line-broken output, and
//! structural splitting along head markers (`1.` / `(1)` / `(가)` / `가.` /
//! `*`). PDF decoding and the OCR engine are external collaborators behind
//! the [`source::PageSource`] and [`ocr::OcrEngine`] traits.
//!
//! ## Quick Start
//!
//! ```no_run
//! use hantext::resolve_file;
//!
//! fn main() -> hantext::Result<()> {
//!     let text = resolve_file("document.pdf")?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! ## With explicit collaborators
//!
//! ```no_run
//! use hantext::{DocumentResolver, PdfiumSource, ResolveOptions, TesseractEngine};
//!
//! fn main() -> hantext::Result<()> {
//!     let source = PdfiumSource::open("document.pdf")?;
//!     let engine = TesseractEngine::new()?;
//!     let resolver = DocumentResolver::with_options(
//!         ResolveOptions::new().with_ocr_dpi(300),
//!     );
//!     let doc = resolver.resolve_with_progress(&source, &engine, |page, total, mode| {
//!         eprintln!("{page}/{total} ({mode})");
//!     })?;
//!     println!("{}", doc.text);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod model;
pub mod ocr;
pub mod resolve;
pub mod source;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Document, ResolutionMode, ResolvedPage, TextBlock};
pub use ocr::{OcrEngine, OcrOptions};
pub use resolve::{DocumentResolver, PageTextResolver, ResolveOptions};
pub use source::PageSource;
pub use text::{
    HeadMarkerClassifier, HeadPattern, NoiseFilter, NoiseRule, ParagraphAccumulator,
    StructuralSplitter,
};

#[cfg(feature = "pdfium")]
pub use source::PdfiumSource;

#[cfg(feature = "tesseract")]
pub use ocr::{TesseractConfig, TesseractEngine};

#[cfg(all(feature = "pdfium", feature = "tesseract"))]
use std::path::Path;

/// Resolve a PDF file to its final assembled text with default options.
///
/// Requires the `pdfium` and `tesseract` features (both on by default).
///
/// # Example
///
/// ```no_run
/// let text = hantext::resolve_file("document.pdf").unwrap();
/// std::fs::write("document.txt", text).unwrap();
/// ```
#[cfg(all(feature = "pdfium", feature = "tesseract"))]
pub fn resolve_file<P: AsRef<Path>>(path: P) -> Result<String> {
    resolve_file_with_options(path, ResolveOptions::default())
}

/// Resolve a PDF file with custom options.
#[cfg(all(feature = "pdfium", feature = "tesseract"))]
pub fn resolve_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ResolveOptions,
) -> Result<String> {
    let source = PdfiumSource::open(path)?;
    let engine = TesseractEngine::new()?;
    let resolver = DocumentResolver::with_options(options);
    Ok(resolver.resolve(&source, &engine)?.text)
}
