//! Noise filtering for OCR and native-extraction output.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A single pattern → replacement pass over the text.
#[derive(Debug, Clone)]
pub struct NoiseRule {
    pattern: Regex,
    replacement: String,
}

impl NoiseRule {
    /// Create a rule from an already-compiled regex.
    pub fn new(pattern: Regex, replacement: impl Into<String>) -> Self {
        Self {
            pattern,
            replacement: replacement.into(),
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Strips layout artifacts from text before paragraph reconstruction.
///
/// Cleaning is a fixed, ordered sequence of pattern → replacement passes,
/// preceded by Unicode NFC normalization (OCR output for Korean frequently
/// arrives with decomposed syllables). The operation is pure, total, and
/// idempotent: `clean(clean(s)) == clean(s)`.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    normalize_unicode: bool,
    rules: Vec<NoiseRule>,
}

impl NoiseFilter {
    /// The default profile for Korean-dominant documents:
    /// every `|` is removed (table ruling artifacts), and every maximal run
    /// of Latin letters collapses to a single space (recognition noise).
    pub fn korean() -> Self {
        Self {
            normalize_unicode: true,
            rules: vec![
                NoiseRule::new(Regex::new(r"\|").unwrap(), ""),
                NoiseRule::new(Regex::new(r"[A-Za-z]+").unwrap(), " "),
            ],
        }
    }

    /// A filter that changes nothing. Useful when only the paragraph fold
    /// is wanted, or for scripts the default profile would damage.
    pub fn pass_through() -> Self {
        Self {
            normalize_unicode: false,
            rules: Vec::new(),
        }
    }

    /// Build a filter from a custom rule set.
    ///
    /// Rules run in order. For idempotence, replacements must not
    /// reintroduce text their own pattern (or an earlier one) matches.
    pub fn with_rules(rules: Vec<NoiseRule>) -> Self {
        Self {
            normalize_unicode: true,
            rules,
        }
    }

    /// Disable the NFC normalization pass.
    pub fn without_unicode_normalization(mut self) -> Self {
        self.normalize_unicode = false;
        self
    }

    /// Apply every rule, in order, to the input.
    pub fn clean(&self, text: &str) -> String {
        let mut result = if self.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };
        for rule in &self.rules {
            result = rule.apply(&result);
        }
        result
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::korean()
    }
}
