// src/extraction/text.rs
use tracing::warn;

/// Extract plain text from PDF bytes, all pages concatenated in page order.
///
/// Uploads are untrusted; a document that cannot be opened or parsed yields
/// an empty string rather than an error, and the rest of the pipeline treats
/// that as "no usable text".
pub fn extract_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF text extraction failed: {}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_bytes_yield_empty_text() {
        assert_eq!(extract_text(b"this is not a pdf"), "");
    }

    #[test]
    fn empty_input_yields_empty_text() {
        assert_eq!(extract_text(b""), "");
    }
}
