//! OCR engine seam and image preprocessing.
//!
//! The recognition engine is an injected capability, never a process-wide
//! singleton; unit tests substitute a fake engine returning canned text.

use image::{DynamicImage, GrayImage};

use crate::error::Result;

#[cfg(feature = "tesseract")]
mod tesseract;

#[cfg(feature = "tesseract")]
pub use tesseract::{TesseractConfig, TesseractEngine};

/// Recognition parameters, tuned by default for single-column Korean
/// documents.
#[derive(Debug, Clone)]
pub struct OcrOptions {
    /// Recognition language (tesseract language code).
    pub language: String,

    /// Page segmentation mode. 4 assumes a single column of text of
    /// variable sizes.
    pub page_seg_mode: u8,

    /// Engine mode. 1 is LSTM-only recognition.
    pub engine_mode: u8,

    /// Preserve inter-word spacing in the output.
    pub preserve_spaces: bool,
}

impl OcrOptions {
    /// Create options with the single-column Korean defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recognition language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the page segmentation mode.
    pub fn with_page_seg_mode(mut self, mode: u8) -> Self {
        self.page_seg_mode = mode;
        self
    }

    /// Set the engine mode.
    pub fn with_engine_mode(mut self, mode: u8) -> Self {
        self.engine_mode = mode;
        self
    }
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            language: "kor".to_string(),
            page_seg_mode: 4,
            engine_mode: 1,
            preserve_spaces: true,
        }
    }
}

/// An OCR engine.
pub trait OcrEngine {
    /// Recognize text in a preprocessed grayscale image.
    ///
    /// Failures surface as [`crate::Error::Recognition`]; the resolver
    /// treats them as an empty page rather than aborting the document.
    fn recognize(&self, image: &GrayImage, options: &OcrOptions) -> Result<String>;
}

/// Prepare a rasterized page for recognition: grayscale conversion followed
/// by autocontrast.
pub fn preprocess(image: &DynamicImage) -> GrayImage {
    autocontrast(&image.to_luma8())
}

/// Linearly stretch the intensity histogram so the darkest pixel maps to 0
/// and the brightest to 255. A flat image is returned unchanged.
pub fn autocontrast(image: &GrayImage) -> GrayImage {
    let (mut min, mut max) = (u8::MAX, u8::MIN);
    for pixel in image.pixels() {
        let v = pixel.0[0];
        min = min.min(v);
        max = max.max(v);
    }

    if min >= max {
        return image.clone();
    }

    let range = (max - min) as f32;
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let v = pixel.0[0];
        pixel.0[0] = (((v - min) as f32 / range) * 255.0).round() as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_ocr_options_defaults() {
        let options = OcrOptions::default();
        assert_eq!(options.language, "kor");
        assert_eq!(options.page_seg_mode, 4);
        assert_eq!(options.engine_mode, 1);
        assert!(options.preserve_spaces);
    }

    #[test]
    fn test_ocr_options_builder() {
        let options = OcrOptions::new()
            .with_language("kor+eng")
            .with_page_seg_mode(6)
            .with_engine_mode(3);
        assert_eq!(options.language, "kor+eng");
        assert_eq!(options.page_seg_mode, 6);
        assert_eq!(options.engine_mode, 3);
    }

    #[test]
    fn test_autocontrast_stretches_range() {
        let mut image = GrayImage::new(2, 1);
        image.put_pixel(0, 0, Luma([100]));
        image.put_pixel(1, 0, Luma([150]));

        let out = autocontrast(&image);
        assert_eq!(out.get_pixel(0, 0).0[0], 0);
        assert_eq!(out.get_pixel(1, 0).0[0], 255);
    }

    #[test]
    fn test_autocontrast_flat_image_unchanged() {
        let image = GrayImage::from_pixel(3, 3, Luma([128]));
        let out = autocontrast(&image);
        assert_eq!(out, image);
    }

    #[test]
    fn test_preprocess_produces_grayscale() {
        let image = DynamicImage::new_rgb8(4, 4);
        let gray = preprocess(&image);
        assert_eq!(gray.dimensions(), (4, 4));
    }
}
