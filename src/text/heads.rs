//! Structural head-marker classification.

use regex::Regex;

/// The marker shapes recognized at the start of a line.
///
/// The syllable-based shapes are fixed to single Korean syllables
/// (`가`–`힣`); generalizing to other scripts would require parameterizing
/// the unit these patterns match, which is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadPattern {
    /// Digits followed by a period, e.g. `1.`
    NumberDot,
    /// Digits in parentheses, e.g. `(1)`
    ParenNumber,
    /// A single Korean syllable in parentheses, e.g. `(가)`
    ParenSyllable,
    /// A single Korean syllable followed by a period, e.g. `가.`
    SyllableDot,
    /// A literal asterisk bullet.
    Bullet,
}

/// Recognizes whether a line begins with a structural head marker.
///
/// Exception patterns are checked first and always win: a line that matches
/// one is never a head, regardless of any marker match. The default
/// exception list contains `(연령)`, a parenthesized word that superficially
/// resembles the parenthesized-syllable marker but is ordinary prose.
#[derive(Debug, Clone)]
pub struct HeadMarkerClassifier {
    patterns: Vec<(HeadPattern, Regex)>,
    exceptions: Vec<Regex>,
}

impl HeadMarkerClassifier {
    /// Create a classifier with the default marker and exception patterns.
    pub fn new() -> Self {
        Self {
            patterns: vec![
                (HeadPattern::NumberDot, Regex::new(r"^\s*\d+\.").unwrap()),
                (HeadPattern::ParenNumber, Regex::new(r"^\s*\(\d+\)").unwrap()),
                (
                    HeadPattern::ParenSyllable,
                    Regex::new(r"^\s*\([가-힣]\)").unwrap(),
                ),
                (
                    HeadPattern::SyllableDot,
                    Regex::new(r"^\s*[가-힣]\.").unwrap(),
                ),
                (HeadPattern::Bullet, Regex::new(r"^\s*\*").unwrap()),
            ],
            exceptions: vec![Regex::new(r"^\s*\(연령\)").unwrap()],
        }
    }

    /// Replace the exception list.
    pub fn with_exceptions(mut self, exceptions: Vec<Regex>) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Add an exception pattern to the existing list.
    pub fn add_exception(mut self, exception: Regex) -> Self {
        self.exceptions.push(exception);
        self
    }

    /// Return which marker shape the line starts with, if any.
    ///
    /// Exceptions take precedence over every marker pattern.
    pub fn classify(&self, line: &str) -> Option<HeadPattern> {
        for exception in &self.exceptions {
            if exception.is_match(line) {
                return None;
            }
        }
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(line))
            .map(|(shape, _)| *shape)
    }

    /// Whether the line begins with a structural head marker.
    pub fn is_head(&self, line: &str) -> bool {
        self.classify(line).is_some()
    }
}

impl Default for HeadMarkerClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_shapes() {
        let classifier = HeadMarkerClassifier::new();
        assert_eq!(classifier.classify("1. 항목"), Some(HeadPattern::NumberDot));
        assert_eq!(classifier.classify("12. 항목"), Some(HeadPattern::NumberDot));
        assert_eq!(classifier.classify("(1) 항목"), Some(HeadPattern::ParenNumber));
        assert_eq!(
            classifier.classify("(가) 항목"),
            Some(HeadPattern::ParenSyllable)
        );
        assert_eq!(classifier.classify("가. 항목"), Some(HeadPattern::SyllableDot));
        assert_eq!(classifier.classify("* 항목"), Some(HeadPattern::Bullet));
    }

    #[test]
    fn test_leading_whitespace_allowed() {
        let classifier = HeadMarkerClassifier::new();
        assert!(classifier.is_head("   2. 들여쓴 항목"));
        assert!(classifier.is_head("\t(나) 항목"));
    }

    #[test]
    fn test_ordinary_prose_is_not_a_head() {
        let classifier = HeadMarkerClassifier::new();
        assert!(!classifier.is_head("일반 문장입니다"));
        assert!(!classifier.is_head("문단의 계속되는 내용"));
        assert!(!classifier.is_head(""));
    }

    #[test]
    fn test_exception_overrides_marker_match() {
        let classifier = HeadMarkerClassifier::new();
        assert!(!classifier.is_head("(연령) 20세"));
        assert!(!classifier.is_head("  (연령) 20세 이상"));
    }

    #[test]
    fn test_added_exception_wins() {
        let classifier =
            HeadMarkerClassifier::new().add_exception(Regex::new(r"^\s*\(주\)").unwrap());
        assert!(!classifier.is_head("(주) 참고사항"));
        // Other markers still classify.
        assert!(classifier.is_head("(가) 항목"));
    }
}
