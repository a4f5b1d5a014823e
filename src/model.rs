//! Model types for resolved documents.
//!
//! These types carry per-page extraction results from the resolver to the
//! assembler and, serialized, to callers that want structured output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A positioned run of native text on a page.
///
/// `top`/`left` are page coordinates with the origin at the top-left corner,
/// so sorting by `(top, left)` ascending approximates single-column reading
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Distance from the top edge of the page.
    pub top: f32,

    /// Distance from the left edge of the page.
    pub left: f32,

    /// Text content of the block.
    pub text: String,
}

impl TextBlock {
    /// Create a new text block.
    pub fn new(top: f32, left: f32, text: impl Into<String>) -> Self {
        Self {
            top,
            left,
            text: text.into(),
        }
    }
}

/// Which extraction path produced a page's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// Selectable text was present and long enough to trust.
    Native,

    /// The page was rasterized and recognized.
    Ocr,
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionMode::Native => write!(f, "native"),
            ResolutionMode::Ocr => write!(f, "OCR"),
        }
    }
}

/// A single resolved page. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPage {
    /// Page number (1-indexed).
    pub number: u32,

    /// Resolved page text, already paragraph-normalized.
    pub text: String,

    /// Which path produced the text.
    pub mode: ResolutionMode,
}

impl ResolvedPage {
    /// Create a new resolved page.
    pub fn new(number: u32, text: impl Into<String>, mode: ResolutionMode) -> Self {
        Self {
            number,
            text: text.into(),
            mode,
        }
    }
}

/// A fully resolved document: ordered pages plus the assembled,
/// structurally split text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Pages in document order.
    pub pages: Vec<ResolvedPage>,

    /// Final assembled text with page headers and structural paragraphs.
    pub text: String,
}

impl Document {
    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Option<&ResolvedPage> {
        if number == 0 {
            return None;
        }
        self.pages.get((number - 1) as usize)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Count pages that fell back to OCR.
    pub fn ocr_page_count(&self) -> u32 {
        self.pages
            .iter()
            .filter(|p| p.mode == ResolutionMode::Ocr)
            .count() as u32
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
