//! Pdfium-backed page source. Behind the `pdfium` feature.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::model::TextBlock;
use crate::source::PageSource;

/// Environment variable overriding where the pdfium shared library lives.
const PDFIUM_PATH_ENV: &str = "HANTEXT_PDFIUM_PATH";

/// A [`PageSource`] backed by the pdfium shared library.
///
/// The document is re-opened per call rather than held open: pdfium page
/// handles borrow the library instance, and the per-open cost is negligible
/// next to rasterization and OCR.
pub struct PdfiumSource {
    pdfium: Pdfium,
    path: PathBuf,
}

impl PdfiumSource {
    /// Open a PDF file.
    ///
    /// Binding precedence: the `HANTEXT_PDFIUM_PATH` directory override,
    /// then the system library. The document is opened once up front so an
    /// unreadable file fails here rather than mid-resolution.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let pdfium = Pdfium::new(bind_library()?);
        let path = path.as_ref().to_path_buf();

        pdfium
            .load_pdf_from_file(&path, None)
            .map_err(|e| Error::PageSource(format!("failed to open {}: {e}", path.display())))?;

        Ok(Self { pdfium, path })
    }

    fn document(&self) -> Result<PdfDocument<'_>> {
        self.pdfium
            .load_pdf_from_file(&self.path, None)
            .map_err(|e| Error::PageSource(format!("failed to open {}: {e}", self.path.display())))
    }

    fn page_index(&self, index: usize) -> Result<u16> {
        u16::try_from(index)
            .map_err(|_| Error::PageSource(format!("page index {index} out of range")))
    }
}

impl PageSource for PdfiumSource {
    fn page_count(&self) -> Result<usize> {
        Ok(self.document()?.pages().len() as usize)
    }

    fn text_blocks(&self, index: usize) -> Result<Vec<TextBlock>> {
        let document = self.document()?;
        let page = document
            .pages()
            .get(self.page_index(index)?)
            .map_err(|e| Error::PageSource(format!("page {index}: {e}")))?;

        let page_height = page.height().value;
        let text = page
            .text()
            .map_err(|e| Error::PageSource(format!("page {index} text: {e}")))?;

        let mut blocks = Vec::new();
        for segment in text.segments().iter() {
            let bounds = segment.bounds();
            // Pdfium measures from the bottom-left corner; flip so that
            // ascending `top` is top-to-bottom reading order.
            blocks.push(TextBlock::new(
                page_height - bounds.top.value,
                bounds.left.value,
                segment.text(),
            ));
        }

        log::debug!("page {index}: {} native text segments", blocks.len());
        Ok(blocks)
    }

    fn rasterize(&self, index: usize, dpi: u32) -> Result<DynamicImage> {
        let document = self.document()?;
        let page = document
            .pages()
            .get(self.page_index(index)?)
            .map_err(|e| Error::PageSource(format!("page {index}: {e}")))?;

        let width_px = (page.width().value * dpi as f32 / 72.0).round().max(1.0) as i32;
        let config = PdfRenderConfig::new().set_target_width(width_px);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| Error::Image(format!("page {index} rasterization: {e}")))?;

        Ok(bitmap.as_image())
    }
}

fn bind_library() -> Result<Box<dyn PdfiumLibraryBindings>> {
    if let Ok(dir) = std::env::var(PDFIUM_PATH_ENV) {
        let lib_path = Pdfium::pdfium_platform_library_name_at_path(&PathBuf::from(&dir));
        match Pdfium::bind_to_library(&lib_path) {
            Ok(bindings) => return Ok(bindings),
            Err(e) => log::warn!("{PDFIUM_PATH_ENV}={dir} did not bind ({e}); trying system library"),
        }
    }

    Pdfium::bind_to_system_library()
        .map_err(|e| Error::Configuration(format!("pdfium library not found: {e}")))
}
