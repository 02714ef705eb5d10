// src/grades/patterns.rs

use super::{GradeItem, clean_item_name};
use regex::Regex;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The recognized line layouts, in match priority order.
///
/// Each parse call builds its own `LinePatterns`; nothing is shared between
/// documents. The fixed pattern literals always compile.
pub(super) struct LinePatterns {
    /// Native D2L export layout: `<name> <raw>/<rawmax> <earned>/<weighted max>`.
    /// The second fraction is the authoritative weighted pair.
    native: Regex,
    /// Generic layouts carrying an explicit weight percentage, tried in
    /// order only when the native layout does not match.
    fallbacks: Vec<Regex>,
}

impl LinePatterns {
    pub(super) fn new() -> Self {
        let native = Regex::new(
            r"(.+?)\s+(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)\s+(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)",
        )
        .unwrap();

        // ---------------------------------------------------------------
        // Fallback layouts, each capturing (name, earned, possible, weight):
        //   <name> <earned>/<possible> Weight: <weight>%
        //   <name>: <earned> out of <possible> (Weight: <weight>%)
        //   <name> | <earned> | <possible> | <weight>%
        //   <name> <earned>/<possible> (<weight>%)
        // ---------------------------------------------------------------
        let fallbacks = [
            r"(?i)(.+?)\s+(\d+(?:\.\d+)?)/(\d+(?:\.\d+)?)\s+Weight:\s*(\d+(?:\.\d+)?)%",
            r"(?i)(.+?):\s*(\d+(?:\.\d+)?)\s+out\s+of\s+(\d+(?:\.\d+)?)\s*\(Weight:\s*(\d+(?:\.\d+)?)%\)",
            r"(?i)(.+?)\s*\|\s*(\d+(?:\.\d+)?)\s*\|\s*(\d+(?:\.\d+)?)\s*\|\s*(\d+(?:\.\d+)?)%",
            r"(?i)(.+?)\s+(\d+(?:\.\d+)?)/(\d+(?:\.\d+)?)\s*\((\d+(?:\.\d+)?)%\)",
        ]
        .into_iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect();

        Self { native, fallbacks }
    }

    /// Try the native layout, then the fallbacks; first success wins.
    /// Returns `None` for non-grade lines and for matched-but-discarded rows.
    pub(super) fn parse_line(&self, line: &str) -> Option<GradeItem> {
        if let Some(caps) = self.native.captures(line) {
            // Groups 2/3 are the raw score, ignored for calculation; the
            // weighted pair carries both the points and, by magnitude, the
            // item's share of the course grade.
            let earned: f64 = caps[4].parse().ok()?;
            let possible: f64 = caps[5].parse().ok()?;
            if earned == 0.0 {
                // Ungraded placeholder row still listed in the export.
                return None;
            }
            let percentage = if possible > 0.0 {
                round2(earned / possible * 100.0)
            } else {
                0.0
            };
            return Some(GradeItem {
                name: clean_item_name(&caps[1]),
                earned,
                possible,
                weight: possible,
                percentage,
            });
        }

        for pattern in &self.fallbacks {
            let Some(caps) = pattern.captures(line) else {
                continue;
            };
            let earned: f64 = caps[2].parse().ok()?;
            let possible: f64 = caps[3].parse().ok()?;
            let weight: f64 = caps[4].parse().ok()?;

            if possible <= 0.0 || weight <= 0.0 {
                return None;
            }

            return Some(GradeItem {
                name: clean_item_name(&caps[1]),
                earned,
                possible,
                weight,
                percentage: round2(earned / possible * 100.0),
            });
        }

        None
    }
}
