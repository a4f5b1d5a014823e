//! Text reconstruction pipeline.
//!
//! Turns ragged OCR/extraction output into blank-line-separated paragraphs,
//! then re-segments the assembled document along structural head markers
//! (numbered items, parenthesized numbers, Korean syllable markers, bullets).
//!
//! Every stage is a pure pass over immutable strings so each one can be
//! tested in isolation.

mod heads;
mod noise;
mod paragraph;
mod split;

pub use heads::{HeadMarkerClassifier, HeadPattern};
pub use noise::{NoiseFilter, NoiseRule};
pub use paragraph::{ParagraphAccumulator, SENTENCE_TERMINALS};
pub use split::StructuralSplitter;
