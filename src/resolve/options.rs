//! Resolution options and configuration.

use crate::ocr::OcrOptions;

/// Options for resolving a document.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Minimum character count for the native-text path to be trusted.
    ///
    /// A scanned page often carries a stray embedded page number; anything
    /// shorter than this is discarded and the page falls back to OCR.
    pub min_native_chars: usize,

    /// Rasterization DPI for the OCR path. High by default, favoring
    /// recognition accuracy over speed.
    pub ocr_dpi: u32,

    /// Recognition parameters passed to the OCR engine.
    pub ocr: OcrOptions,
}

impl ResolveOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the native-text minimum length.
    pub fn with_min_native_chars(mut self, chars: usize) -> Self {
        self.min_native_chars = chars;
        self
    }

    /// Set the OCR rasterization DPI.
    pub fn with_ocr_dpi(mut self, dpi: u32) -> Self {
        self.ocr_dpi = dpi;
        self
    }

    /// Set the recognition language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.ocr.language = language.into();
        self
    }

    /// Replace the full OCR option set.
    pub fn with_ocr(mut self, ocr: OcrOptions) -> Self {
        self.ocr = ocr;
        self
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            min_native_chars: 30,
            ocr_dpi: 400,
            ocr: OcrOptions::default(),
        }
    }
}
