// src/grades/mod.rs

mod patterns;

use patterns::LinePatterns;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

/// Display names are truncated to this many characters.
const NAME_MAX_CHARS: usize = 50;

/// Label prefixes the LMS prepends to item names in some export styles.
const NAME_PREFIXES: [&str; 6] = [
    "Grade Item:",
    "Item:",
    "Assignment:",
    "Quiz:",
    "Test:",
    "Exam:",
];

/// A single graded item recovered from one line of the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeItem {
    pub name: String,
    pub earned: f64,
    pub possible: f64,
    /// Contribution to the final grade, in percentage-point units.
    pub weight: f64,
    /// `earned / possible * 100`, rounded to 2 decimals. May exceed 100
    /// for bonus points.
    pub percentage: f64,
}

/// Scan raw export text and collect every line that parses as a grade item,
/// in source line order.
///
/// Lines are matched against the native D2L layout first, then against the
/// fallback layouts in priority order. Lines matching nothing are skipped —
/// most of an export is headers and other non-grade content.
pub fn parse_grade_items(text: &str) -> Vec<GradeItem> {
    let patterns = LinePatterns::new();
    let mut items = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(item) = patterns.parse_line(line) {
            debug!(
                name = %item.name,
                earned = item.earned,
                possible = item.possible,
                weight = item.weight,
                percentage = item.percentage,
                "Found grade item"
            );
            items.push(item);
        }
    }

    items
}

/// Normalize a captured item name for display: strip known label prefixes,
/// trim trailing punctuation, truncate.
fn clean_item_name(raw: &str) -> String {
    let mut name = raw.trim();

    loop {
        let mut stripped = false;
        for prefix in NAME_PREFIXES {
            if let Some(rest) = name.strip_prefix(prefix) {
                name = rest.trim_start();
                stripped = true;
            }
        }
        if !stripped {
            break;
        }
    }

    let name = name.trim_end_matches([':', '|', '.', '-']).trim();
    name.chars().take(NAME_MAX_CHARS).collect()
}
