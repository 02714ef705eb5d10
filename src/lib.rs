//! Grade extraction and calculation for LMS (D2L-style) PDF grade exports.
//!
//! The pipeline: extract the PDF's text layer, match each line against the
//! recognized grade layouts, then aggregate the parsed items into a weighted
//! course average and letter grade. The caller (upload handling, rendering)
//! stays outside this crate; it hands in a file path or raw text and gets an
//! [`AnalysisResult`] back.

mod analysis;
mod error;
mod grades;
mod pdf_text;
mod processor;

pub use analysis::{AnalysisResult, LetterGrade};
pub use error::ProcessingError;
pub use grades::GradeItem;
pub use pdf_text::{extract_text, extract_text_from_bytes};
pub use processor::{analyze_text, process};
