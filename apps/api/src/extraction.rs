//! Text Extractor — turns an uploaded PDF into plain text plus a page count.

use std::path::Path;

use thiserror::Error;

/// Text and page count pulled from one uploaded document.
/// Built once per request and discarded when the response is sent.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: usize,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Failed to extract text from PDF: {0}")]
    Text(#[from] pdf_extract::OutputError),
}

/// Parses the PDF at `path`. Blocking; callers on the async runtime should
/// wrap this in `spawn_blocking`.
pub fn extract_document(path: &Path) -> Result<ExtractedDocument, ExtractError> {
    let doc = lopdf::Document::load(path)?;
    let page_count = doc.get_pages().len();

    let text = pdf_extract::extract_text(path)?;

    Ok(ExtractedDocument { text, page_count })
}
