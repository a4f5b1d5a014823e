//! Head-marker-driven structural paragraph splitting.

use regex::Regex;

use super::{HeadMarkerClassifier, NoiseFilter};

/// Re-segments paragraph-reconstructed text along structural head markers.
///
/// Works in two phases. A relocation pre-pass inserts a newline before any
/// head marker that sits mid-line preceded by whitespace (markers end up
/// there when OCR or extraction wraps an enumerated item). Then a line fold
/// closes the current paragraph whenever a line classifies as a head and
/// opens a new one with that line first, so each enumerated item, bullet, or
/// flowing paragraph becomes one blank-line-separated unit.
#[derive(Debug, Clone)]
pub struct StructuralSplitter {
    classifier: HeadMarkerClassifier,
    filter: NoiseFilter,
    relocations: Vec<Regex>,
}

impl StructuralSplitter {
    /// Create a splitter with the default classifier and noise profile.
    pub fn new() -> Self {
        Self::with_parts(HeadMarkerClassifier::new(), NoiseFilter::korean())
    }

    /// Create a splitter from an explicit classifier and filter.
    pub fn with_parts(classifier: HeadMarkerClassifier, filter: NoiseFilter) -> Self {
        // One pass per marker shape, applied to the evolving string in this
        // fixed order. Each pattern captures the marker so the replacement
        // can re-emit it right after the inserted newline.
        let relocations = vec![
            Regex::new(r"\s+(\(\d+\))").unwrap(),
            Regex::new(r"\s+(\([가-힣]\))").unwrap(),
            Regex::new(r"\s+([가-힣]\.)").unwrap(),
            Regex::new(r"\s+(\d+\.)").unwrap(),
            Regex::new(r"\s+(\*)").unwrap(),
        ];
        Self {
            classifier,
            filter,
            relocations,
        }
    }

    /// Access the classifier in use.
    pub fn classifier(&self) -> &HeadMarkerClassifier {
        &self.classifier
    }

    /// Split text into head-delimited paragraphs.
    ///
    /// Returns the paragraphs joined by a single blank line. Paragraph and
    /// line order is preserved relative to the input.
    pub fn split_by_heads(&self, text: &str) -> String {
        let relocated = self.relocate_heads(text);

        let mut paragraphs: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();

        let flush = |current: &mut Vec<String>, paragraphs: &mut Vec<String>| {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        };

        for line in relocated.lines() {
            // Re-clean defensively; idempotent when the input already went
            // through paragraph normalization.
            let line = self.filter.clean(line);
            let stripped = line.trim_end();

            if stripped.trim().is_empty() {
                flush(&mut current, &mut paragraphs);
                continue;
            }

            let candidate = stripped.trim_start();

            if self.classifier.is_head(candidate) {
                flush(&mut current, &mut paragraphs);
                current.push(candidate.to_string());
            } else {
                current.push(stripped.to_string());
            }
        }

        flush(&mut current, &mut paragraphs);

        paragraphs.join("\n\n")
    }

    /// Force mid-line head markers to line starts.
    fn relocate_heads(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pattern in &self.relocations {
            result = pattern.replace_all(&result, "\n$1").into_owned();
        }
        result
    }
}

impl Default for StructuralSplitter {
    fn default() -> Self {
        Self::new()
    }
}
