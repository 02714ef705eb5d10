// src/error.rs

use thiserror::Error;

/// Everything that can stop a grade report from being processed.
///
/// Per-line pattern mismatches are not errors — most lines in an export
/// are headers or other non-grade content and are skipped silently.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The PDF could not be opened, decoded, or yielded no readable text.
    /// Scanned/image-only documents land here too.
    #[error("could not read PDF file: {0}")]
    DocumentRead(String),

    /// The document was readable but no line matched a known grade layout.
    #[error("no grades found in the PDF; this does not look like a grades export")]
    NoGradesFound,
}
