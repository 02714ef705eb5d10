// src/processor.rs

use crate::analysis::{self, AnalysisResult};
use crate::error::ProcessingError;
use crate::grades;
use crate::pdf_text;
use std::path::Path;
use tracing::info;

/// Process a grade export PDF from disk: extract its text, parse the grade
/// items, and compute the weighted average and letter grade.
pub fn process(path: impl AsRef<Path>) -> Result<AnalysisResult, ProcessingError> {
    let text = pdf_text::extract_text(path)?;
    analyze_text(&text)
}

/// Run the parsing and aggregation pipeline on already-extracted text.
///
/// Fails with [`ProcessingError::NoGradesFound`] when no line matches a
/// recognized grade layout.
pub fn analyze_text(text: &str) -> Result<AnalysisResult, ProcessingError> {
    let items = grades::parse_grade_items(text);
    if items.is_empty() {
        return Err(ProcessingError::NoGradesFound);
    }

    let result = analysis::summarize(items);
    info!(
        items = result.items_count,
        weighted_average = result.weighted_average,
        letter_grade = %result.letter_grade,
        "Processed grade export"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::LetterGrade;

    const SAMPLE_EXPORT: &str = "\
Course Grades - CSCI 1301
Student: Jane Doe

Grade Item Points Weight Achieved
Quiz 1 9 / 10 2.25 / 2.5
Quiz 2 8.24 / 10 2.75 / 3.33
Midterm Exam 72 / 100 18 / 25
Final Exam 0 / 100 0 / 25

End of report
";

    #[test]
    fn test_sample_export() {
        let result = analyze_text(SAMPLE_EXPORT).unwrap();

        // The zero-earned final exam row is a placeholder and is excluded.
        assert_eq!(result.items_count, 3);
        assert_eq!(result.grade_items[0].name, "Quiz 1");
        assert_eq!(result.grade_items[1].name, "Quiz 2");
        assert_eq!(result.grade_items[2].name, "Midterm Exam");

        // Weights 2.5 + 3.33 + 25 are far from 100, so the average is
        // renormalized by the posted weight total.
        let expected: f64 = (90.0 * 0.025 + 82.58 * 0.0333 + 72.0 * 0.25) / 0.3083;
        assert_eq!(result.weighted_average, (expected * 100.0).round() / 100.0);
        assert_eq!(result.letter_grade, LetterGrade::C);
    }

    #[test]
    fn test_idempotent() {
        let first = analyze_text(SAMPLE_EXPORT).unwrap();
        let second = analyze_text(SAMPLE_EXPORT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_items_have_positive_possible() {
        let result = analyze_text(SAMPLE_EXPORT).unwrap();
        for item in &result.grade_items {
            assert!(item.possible > 0.0);
            assert!(item.percentage >= 0.0);
        }
    }

    #[test]
    fn test_no_grades_in_unrelated_text() {
        let err = analyze_text("Meeting notes\n- discuss roadmap\n").unwrap_err();
        assert!(matches!(err, ProcessingError::NoGradesFound));
    }

    #[test]
    fn test_empty_text() {
        assert!(matches!(
            analyze_text(""),
            Err(ProcessingError::NoGradesFound)
        ));
    }

    #[test]
    fn test_unreadable_file_propagates() {
        let err = process("/no/such/grades.pdf").unwrap_err();
        assert!(matches!(err, ProcessingError::DocumentRead(_)));
    }
}
