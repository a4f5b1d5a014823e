//! Paragraph reconstruction from line-oriented extraction output.

use super::NoiseFilter;

/// Characters treated as ending a sentence when they close out a line.
///
/// Includes the full-width close parenthesis, which Korean OCR output uses
/// interchangeably with the ASCII one.
pub const SENTENCE_TERMINALS: &[char] = &['.', '?', '!', '…', '）', ')'];

/// Folds a sequence of raw lines into blank-line-separated paragraphs.
///
/// OCR output (and some native extraction) breaks lines at arbitrary visual
/// boundaries. The accumulator heals those breaks with a single-pass,
/// stateful fold: blank lines terminate paragraphs, and a non-blank line
/// either continues the previous sentence (joined with a space) or starts a
/// visually distinct line within the same paragraph (joined with a newline)
/// depending on whether the buffer so far ends in a sentence-terminal
/// character.
///
/// Known limitation: a line ending in terminal punctuation cannot be told
/// apart from a genuine paragraph break without an actual blank line, so
/// such lines stay in the same paragraph. This imprecision is deliberate.
#[derive(Debug, Clone)]
pub struct ParagraphAccumulator {
    filter: NoiseFilter,
    terminals: Vec<char>,
}

impl ParagraphAccumulator {
    /// Create an accumulator with the default Korean noise profile.
    pub fn new() -> Self {
        Self {
            filter: NoiseFilter::korean(),
            terminals: SENTENCE_TERMINALS.to_vec(),
        }
    }

    /// Use a custom noise filter for the initial cleaning pass.
    pub fn with_filter(filter: NoiseFilter) -> Self {
        Self {
            filter,
            terminals: SENTENCE_TERMINALS.to_vec(),
        }
    }

    /// Override the sentence-terminal character set.
    pub fn with_terminals(mut self, terminals: impl Into<Vec<char>>) -> Self {
        self.terminals = terminals.into();
        self
    }

    /// Reconstruct paragraphs from line-broken text.
    ///
    /// The whole input is noise-cleaned first, then folded line by line.
    /// Output paragraphs are separated by exactly one blank line, with no
    /// leading or trailing blank content. Input consisting solely of blank
    /// lines yields the empty string.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = self.filter.clean(raw);

        let mut paragraphs: Vec<String> = Vec::new();
        let mut buffer = String::new();

        for line in cleaned.lines() {
            let stripped = line.trim();

            if stripped.is_empty() {
                // Paragraph terminator.
                if !buffer.is_empty() {
                    paragraphs.push(buffer.trim().to_string());
                    buffer.clear();
                }
                continue;
            }

            if buffer.is_empty() {
                buffer.push_str(stripped);
            } else if self.ends_in_terminal(&buffer) {
                // Sentence ended; keep the line in the same paragraph but
                // visually distinct.
                buffer.push('\n');
                buffer.push_str(stripped);
            } else {
                // Wrapped continuation of the same sentence.
                buffer.push(' ');
                buffer.push_str(stripped);
            }
        }

        if !buffer.is_empty() {
            paragraphs.push(buffer.trim().to_string());
        }

        paragraphs.join("\n\n")
    }

    fn ends_in_terminal(&self, buffer: &str) -> bool {
        buffer
            .chars()
            .last()
            .is_some_and(|c| self.terminals.contains(&c))
    }
}

impl Default for ParagraphAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
