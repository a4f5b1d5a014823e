//! Whole-document resolution and assembly.

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Document, ResolutionMode, ResolvedPage};
use crate::ocr::OcrEngine;
use crate::source::PageSource;
use crate::text::StructuralSplitter;

use super::{PageTextResolver, ResolveOptions};

/// Resolves every page of a document and assembles the final text.
///
/// Assembly is strictly sequential and order-preserving: pages are
/// concatenated in index order under 1-indexed page headers, and the
/// structural split runs once over the entire joined document, because head
/// markers may legitimately span a page boundary.
#[derive(Debug, Clone)]
pub struct DocumentResolver {
    page: PageTextResolver,
    splitter: StructuralSplitter,
}

impl DocumentResolver {
    /// Create a resolver with default options.
    pub fn new() -> Self {
        Self::with_options(ResolveOptions::default())
    }

    /// Create a resolver with the given options.
    pub fn with_options(options: ResolveOptions) -> Self {
        Self {
            page: PageTextResolver::with_options(options),
            splitter: StructuralSplitter::new(),
        }
    }

    /// Resolve all pages in order and assemble the document.
    pub fn resolve<S, E>(&self, source: &S, engine: &E) -> Result<Document>
    where
        S: PageSource + ?Sized,
        E: OcrEngine + ?Sized,
    {
        self.resolve_with_progress(source, engine, |_, _, _| {})
    }

    /// Resolve all pages, invoking `progress(page_number, total, mode)` once
    /// per page, in order, as each page completes.
    pub fn resolve_with_progress<S, E, F>(
        &self,
        source: &S,
        engine: &E,
        progress: F,
    ) -> Result<Document>
    where
        S: PageSource + ?Sized,
        E: OcrEngine + ?Sized,
        F: Fn(usize, usize, ResolutionMode),
    {
        let total = source.page_count()?;
        let mut pages = Vec::with_capacity(total);

        for index in 0..total {
            let page = self.page.resolve(source, engine, index)?;
            log::info!("page {}/{} resolved via {}", page.number, total, page.mode);
            progress(page.number as usize, total, page.mode);
            pages.push(page);
        }

        let text = self.assemble(&pages);
        Ok(Document { pages, text })
    }

    /// Resolve pages in parallel with rayon, for sources and engines that
    /// are thread-safe. Results are collected back into page-index order
    /// before assembly, and the progress hook fires in that order once all
    /// pages have completed. Assembly itself is always sequential.
    pub fn resolve_parallel<S, E, F>(&self, source: &S, engine: &E, progress: F) -> Result<Document>
    where
        S: PageSource + Sync,
        E: OcrEngine + Sync,
        F: Fn(usize, usize, ResolutionMode),
    {
        let total = source.page_count()?;

        let mut pages = (0..total)
            .into_par_iter()
            .map(|index| self.page.resolve(source, engine, index))
            .collect::<Result<Vec<ResolvedPage>>>()?;
        pages.sort_by_key(|page| page.number);

        for page in &pages {
            progress(page.number as usize, total, page.mode);
        }

        let text = self.assemble(&pages);
        Ok(Document { pages, text })
    }

    /// Join per-page text under page headers and run the structural split
    /// over the whole document.
    fn assemble(&self, pages: &[ResolvedPage]) -> String {
        let blocks: Vec<String> = pages
            .iter()
            .map(|page| {
                format!(
                    "-------- {}페이지 --------\n\n{}\n",
                    page.number, page.text
                )
            })
            .collect();

        let joined = blocks.join("\n\n");
        self.splitter.split_by_heads(joined.trim())
    }
}

impl Default for DocumentResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::model::TextBlock;
    use crate::ocr::OcrOptions;
    use image::{DynamicImage, GrayImage};
    use std::sync::Mutex;

    struct TwoPageSource;

    impl PageSource for TwoPageSource {
        fn page_count(&self) -> Result<usize> {
            Ok(2)
        }

        fn text_blocks(&self, index: usize) -> Result<Vec<TextBlock>> {
            match index {
                // Page 1: plenty of native text.
                0 => Ok(vec![TextBlock::new(
                    10.0,
                    0.0,
                    "1. 첫번째 항목의 본문이 여기에 충분히 길게 이어집니다.",
                )]),
                // Page 2: nothing selectable.
                _ => Ok(vec![]),
            }
        }

        fn rasterize(&self, _index: usize, _dpi: u32) -> Result<DynamicImage> {
            Ok(DynamicImage::new_luma8(8, 8))
        }
    }

    struct CannedEngine;

    impl OcrEngine for CannedEngine {
        fn recognize(&self, _image: &GrayImage, _options: &OcrOptions) -> Result<String> {
            Ok("2. 두번째 항목\n스캔된 내용이 이어짐".to_string())
        }
    }

    #[test]
    fn test_two_page_document_modes_and_headers() {
        let resolver = DocumentResolver::new();
        let doc = resolver.resolve(&TwoPageSource, &CannedEngine).unwrap();

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].mode, ResolutionMode::Native);
        assert_eq!(doc.pages[1].mode, ResolutionMode::Ocr);

        let first = doc.text.find("-------- 1페이지 --------").unwrap();
        let second = doc.text.find("-------- 2페이지 --------").unwrap();
        assert!(first < second);
        assert!(doc.text.contains("1. 첫번째"));
        assert!(doc.text.contains("2. 두번째"));
    }

    #[test]
    fn test_progress_hook_fires_in_order() {
        let seen: Mutex<Vec<(usize, usize, ResolutionMode)>> = Mutex::new(Vec::new());
        let resolver = DocumentResolver::new();
        resolver
            .resolve_with_progress(&TwoPageSource, &CannedEngine, |number, total, mode| {
                seen.lock().unwrap().push((number, total, mode));
            })
            .unwrap();

        let seen = seen.into_inner().unwrap();
        assert_eq!(
            seen,
            vec![
                (1, 2, ResolutionMode::Native),
                (2, 2, ResolutionMode::Ocr),
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let resolver = DocumentResolver::new();
        let sequential = resolver.resolve(&TwoPageSource, &CannedEngine).unwrap();
        let parallel = resolver
            .resolve_parallel(&TwoPageSource, &CannedEngine, |_, _, _| {})
            .unwrap();

        assert_eq!(sequential.text, parallel.text);
    }

    #[test]
    fn test_structural_split_runs_over_whole_document() {
        // An enumerated item on page 2 must still be split out even though
        // the split happens after page joining.
        let resolver = DocumentResolver::new();
        let doc = resolver.resolve(&TwoPageSource, &CannedEngine).unwrap();

        let paragraphs: Vec<&str> = doc.text.split("\n\n").collect();
        assert!(paragraphs.iter().any(|p| p.starts_with("2. 두번째")));
    }
}
