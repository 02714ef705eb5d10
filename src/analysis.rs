// src/analysis.rs

use crate::grades::GradeItem;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Letter grade bands, inclusive on the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "D+")]
    DPlus,
    D,
    F,
}

impl LetterGrade {
    /// Classify an (already rounded) course percentage.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::A
        } else if percentage >= 85.0 {
            Self::BPlus
        } else if percentage >= 80.0 {
            Self::B
        } else if percentage >= 75.0 {
            Self::CPlus
        } else if percentage >= 70.0 {
            Self::C
        } else if percentage >= 65.0 {
            Self::DPlus
        } else if percentage >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(s)
    }
}

/// Everything the presentation layer needs to render one processed export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub weighted_average: f64,
    pub letter_grade: LetterGrade,
    pub grade_items: Vec<GradeItem>,
    pub total_possible_points: f64,
    pub total_earned_points: f64,
    pub items_count: usize,
}

/// Aggregate parsed items into the final result record.
pub fn summarize(items: Vec<GradeItem>) -> AnalysisResult {
    let weighted_average = round2(weighted_average(&items));
    AnalysisResult {
        weighted_average,
        letter_grade: LetterGrade::from_percentage(weighted_average),
        total_possible_points: items.iter().map(|i| i.possible * i.weight / 100.0).sum(),
        total_earned_points: items.iter().map(|i| i.earned * i.weight / 100.0).sum(),
        items_count: items.len(),
        grade_items: items,
    }
}

/// Weighted course average over the items' rounded percentages.
///
/// Weights are nominally percentage points summing to ~100. Partial exports
/// (not every weighted item has a posted grade) break that sum, so when it
/// is off by more than the tolerance the result is renormalized by the
/// actual weight total.
fn weighted_average(items: &[GradeItem]) -> f64 {
    let mut weighted_points = 0.0;
    let mut total_weight = 0.0;

    for item in items {
        let fraction = item.weight / 100.0;
        weighted_points += item.percentage * fraction;
        total_weight += fraction;
    }

    if total_weight <= 0.0 {
        return 0.0;
    }

    if (total_weight - 1.0).abs() > 0.01 {
        warn!(
            weight_sum = format!("{:.1}%", total_weight * 100.0),
            "Weights do not sum to 100%, normalizing"
        );
        weighted_points / total_weight
    } else {
        weighted_points
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
