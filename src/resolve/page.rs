//! Per-page text resolution: native extraction with OCR fallback.

use crate::error::{Error, Result};
use crate::model::{ResolutionMode, ResolvedPage, TextBlock};
use crate::ocr::{self, OcrEngine};
use crate::source::PageSource;
use crate::text::{NoiseFilter, ParagraphAccumulator};

use super::ResolveOptions;

/// Resolves one page at a time, choosing between the native-text path and
/// the OCR fallback.
#[derive(Debug, Clone)]
pub struct PageTextResolver {
    options: ResolveOptions,
    filter: NoiseFilter,
    accumulator: ParagraphAccumulator,
}

impl PageTextResolver {
    /// Create a resolver with default options.
    pub fn new() -> Self {
        Self::with_options(ResolveOptions::default())
    }

    /// Create a resolver with the given options.
    pub fn with_options(options: ResolveOptions) -> Self {
        Self {
            options,
            filter: NoiseFilter::korean(),
            accumulator: ParagraphAccumulator::new(),
        }
    }

    /// Options in use.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve a single page (0-indexed) to text plus its resolution mode.
    ///
    /// Tries native extraction first; if the cleaned, joined block text is
    /// shorter than the configured minimum, the page is treated as scanned
    /// and goes through rasterization and OCR. A failed OCR call degrades to
    /// an empty body with a logged warning rather than failing the page.
    pub fn resolve<S, E>(&self, source: &S, engine: &E, index: usize) -> Result<ResolvedPage>
    where
        S: PageSource + ?Sized,
        E: OcrEngine + ?Sized,
    {
        let number = index as u32 + 1;

        if let Some(text) = self.native_text(source, index)? {
            return Ok(ResolvedPage::new(number, text, ResolutionMode::Native));
        }

        let text = self.ocr_text(source, engine, index)?;
        Ok(ResolvedPage::new(number, text, ResolutionMode::Ocr))
    }

    /// The native path: sort blocks into reading order, clean each, join
    /// survivors with blank lines. Returns `None` when the result is too
    /// short to be a real text page.
    fn native_text<S>(&self, source: &S, index: usize) -> Result<Option<String>>
    where
        S: PageSource + ?Sized,
    {
        let mut blocks = source.text_blocks(index)?;
        sort_into_reading_order(&mut blocks);

        let paragraphs: Vec<String> = blocks
            .iter()
            .filter_map(|block| {
                let cleaned = self.filter.clean(block.text.trim());
                let cleaned = cleaned.trim();
                if cleaned.is_empty() {
                    None
                } else {
                    Some(cleaned.to_string())
                }
            })
            .collect();

        if paragraphs.is_empty() {
            return Ok(None);
        }

        let full_text = paragraphs.join("\n\n").trim().to_string();
        if full_text.chars().count() < self.options.min_native_chars {
            log::debug!(
                "page {}: native text below threshold ({} chars), falling back to OCR",
                index + 1,
                full_text.chars().count()
            );
            return Ok(None);
        }

        Ok(Some(full_text))
    }

    /// The OCR path: rasterize, preprocess, recognize, then reconstruct
    /// paragraphs from the raw line-broken output.
    fn ocr_text<S, E>(&self, source: &S, engine: &E, index: usize) -> Result<String>
    where
        S: PageSource + ?Sized,
        E: OcrEngine + ?Sized,
    {
        let image = source.rasterize(index, self.options.ocr_dpi)?;
        let prepared = ocr::preprocess(&image);

        let raw = match engine.recognize(&prepared, &self.options.ocr) {
            Ok(text) => text,
            Err(Error::Recognition(reason)) => {
                log::warn!("page {}: recognition failed ({reason}); emitting empty page", index + 1);
                String::new()
            }
            Err(other) => return Err(other),
        };

        Ok(self.accumulator.normalize(&raw))
    }
}

impl Default for PageTextResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort blocks by (top ascending, left ascending): the canonical
/// reading-order approximation for a single-column page.
fn sort_into_reading_order(blocks: &mut [TextBlock]) {
    blocks.sort_by(|a, b| a.top.total_cmp(&b.top).then(a.left.total_cmp(&b.left)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    struct StubSource {
        blocks: Vec<TextBlock>,
    }

    impl PageSource for StubSource {
        fn page_count(&self) -> Result<usize> {
            Ok(1)
        }

        fn text_blocks(&self, _index: usize) -> Result<Vec<TextBlock>> {
            Ok(self.blocks.clone())
        }

        fn rasterize(&self, _index: usize, _dpi: u32) -> Result<DynamicImage> {
            Ok(DynamicImage::new_luma8(8, 8))
        }
    }

    struct CannedEngine {
        text: &'static str,
    }

    impl OcrEngine for CannedEngine {
        fn recognize(&self, _image: &image::GrayImage, _options: &crate::ocr::OcrOptions) -> Result<String> {
            Ok(self.text.to_string())
        }
    }

    struct FailingEngine;

    impl OcrEngine for FailingEngine {
        fn recognize(&self, _image: &image::GrayImage, _options: &crate::ocr::OcrOptions) -> Result<String> {
            Err(Error::Recognition("model data missing".to_string()))
        }
    }

    fn long_korean() -> String {
        "이 문서는 충분히 긴 한글 본문을 포함하고 있으므로 원문 텍스트 경로를 사용합니다.".to_string()
    }

    #[test]
    fn test_native_path_when_text_sufficient() {
        let source = StubSource {
            blocks: vec![TextBlock::new(10.0, 0.0, long_korean())],
        };
        let engine = CannedEngine { text: "무시됨" };
        let resolver = PageTextResolver::new();

        let page = resolver.resolve(&source, &engine, 0).unwrap();
        assert_eq!(page.mode, ResolutionMode::Native);
        assert_eq!(page.number, 1);
        assert!(page.text.contains("한글 본문"));
    }

    #[test]
    fn test_ocr_fallback_when_text_too_short() {
        let source = StubSource {
            blocks: vec![TextBlock::new(10.0, 0.0, "3")],
        };
        let engine = CannedEngine {
            text: "인식된 첫 줄\n이어지는 줄",
        };
        let resolver = PageTextResolver::new();

        let page = resolver.resolve(&source, &engine, 0).unwrap();
        assert_eq!(page.mode, ResolutionMode::Ocr);
        assert_eq!(page.text, "인식된 첫 줄 이어지는 줄");
    }

    #[test]
    fn test_blocks_sorted_into_reading_order() {
        // Out of visual order on purpose.
        let source = StubSource {
            blocks: vec![
                TextBlock::new(200.0, 0.0, "아래쪽 문단 내용이 길게 이어지는 본문입니다."),
                TextBlock::new(100.0, 50.0, "위쪽 오른쪽 블록의 내용입니다."),
                TextBlock::new(100.0, 0.0, "위쪽 왼쪽 블록의 내용입니다."),
            ],
        };
        let engine = CannedEngine { text: "" };
        let resolver = PageTextResolver::new();

        let page = resolver.resolve(&source, &engine, 0).unwrap();
        assert_eq!(page.mode, ResolutionMode::Native);
        let first = page.text.find("위쪽 왼쪽").unwrap();
        let second = page.text.find("위쪽 오른쪽").unwrap();
        let third = page.text.find("아래쪽").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_recognition_failure_degrades_to_empty_page() {
        let source = StubSource { blocks: vec![] };
        let resolver = PageTextResolver::new();

        let page = resolver.resolve(&source, &FailingEngine, 0).unwrap();
        assert_eq!(page.mode, ResolutionMode::Ocr);
        assert!(page.text.is_empty());
    }

    #[test]
    fn test_threshold_configurable() {
        let source = StubSource {
            blocks: vec![TextBlock::new(0.0, 0.0, "짧은 본문")],
        };
        let engine = CannedEngine { text: "" };
        let resolver = PageTextResolver::with_options(ResolveOptions::new().with_min_native_chars(3));

        let page = resolver.resolve(&source, &engine, 0).unwrap();
        assert_eq!(page.mode, ResolutionMode::Native);
        assert_eq!(page.text, "짧은 본문");
    }
}
