//! Turns an uploaded document into plain text before the matching core
//! ever sees it.

use tracing::warn;

/// Extracts text from an upload by filename. PDF extraction failures
/// degrade to an empty string; the handler turns that into a validation
/// error. Anything that is not a PDF is decoded as lossy UTF-8.
pub fn extract_upload_text(filename: &str, data: &[u8]) -> String {
    if filename.to_lowercase().ends_with(".pdf") {
        match pdf_extract::extract_text_from_mem(data) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("pdf extraction failed for '{filename}': {e}");
                String::new()
            }
        }
    } else {
        String::from_utf8_lossy(data).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_upload_passes_through() {
        let text = extract_upload_text("resume.txt", b"Rust engineer, Berlin");
        assert_eq!(text, "Rust engineer, Berlin");
    }

    #[test]
    fn test_invalid_utf8_does_not_panic() {
        let text = extract_upload_text("resume.txt", &[0xff, 0xfe, b'h', b'i']);
        assert!(text.ends_with("hi"));
    }

    #[test]
    fn test_pdf_extension_is_case_insensitive() {
        // Garbage bytes cannot be parsed as a PDF, so the pdf path must
        // degrade to empty rather than fall through to lossy decoding.
        let text = extract_upload_text("Resume.PDF", b"not a pdf");
        assert_eq!(text, "");
    }
}
