// src/pdf_text.rs

use crate::error::ProcessingError;
use lopdf::Document;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read a PDF from disk and return its text content.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String, ProcessingError> {
    let bytes = fs::read(&path)
        .map_err(|e| ProcessingError::DocumentRead(format!("failed to open file: {e}")))?;
    extract_text_from_bytes(&bytes)
}

/// Extract the text layer from raw PDF bytes, page by page.
///
/// Non-empty page texts are concatenated with a newline separator. A PDF
/// that fails to parse, has no text layer, or produces only whitespace is
/// reported as a single "unreadable" error category.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String, ProcessingError> {
    // --- Phase 1: structural check with lopdf ---
    let doc = Document::load_mem(bytes)
        .map_err(|e| ProcessingError::DocumentRead(format!("failed to parse PDF: {e}")))?;

    if looks_like_scanned(&doc) {
        return Err(ProcessingError::DocumentRead(
            "the PDF appears to be scanned (image-only, no text layer)".into(),
        ));
    }

    // --- Phase 2: full text extraction ---
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ProcessingError::DocumentRead(format!("text extraction failed: {e}")))?;

    let mut text = String::new();
    for page in &pages {
        if !page.is_empty() {
            text.push_str(page);
            text.push('\n');
        }
    }

    if text.trim().is_empty() {
        warn!(pages = pages.len(), "PDF parsed but contains no readable text");
        return Err(ProcessingError::DocumentRead(
            "the PDF appears to be empty or contains no readable text".into(),
        ));
    }

    info!(pages = pages.len(), chars = text.len(), "Text extracted");
    Ok(text)
}

/// A page with XObject images but no Font resources is almost certainly a
/// scan. Treat the document as scanned when every page looks like that.
fn looks_like_scanned(doc: &Document) -> bool {
    let pages = doc.get_pages();
    if pages.is_empty() {
        return false; // can't tell, let text extraction try
    }

    let image_only = pages
        .values()
        .filter(|&&object_id| {
            let Ok(page_obj) = doc.get_object(object_id) else {
                return false;
            };
            let Ok(page_dict) = page_obj.as_dict() else {
                return false;
            };
            !resource_dict_nonempty(doc, page_dict, b"Font")
                && resource_dict_nonempty(doc, page_dict, b"XObject")
        })
        .count();

    image_only == pages.len()
}

fn resource_dict_nonempty(doc: &Document, page_dict: &lopdf::Dictionary, key: &[u8]) -> bool {
    page_dict
        .get(b"Resources")
        .ok()
        .and_then(|r| doc.dereference(r).ok())
        .and_then(|(_, resolved)| resolved.as_dict().ok())
        .and_then(|res| res.get(key).ok())
        .and_then(|v| doc.dereference(v).ok())
        .and_then(|(_, resolved)| resolved.as_dict().ok())
        .is_some_and(|d| !d.is_empty())
}
