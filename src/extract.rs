//! PDF text extraction.
//!
//! `pdf-extract` returns the whole document as a single string with form
//! feeds between pages; we split that back into per-page texts so chunk
//! titles can carry real page numbers. The page text itself is passed
//! through untouched.

use std::path::Path;

use crate::error::{Error, Result};

/// Extract per-page text from a PDF file, in page order.
///
/// Unreadable or malformed files surface as [`Error::Io`] /
/// [`Error::Extraction`]; downstream chunking never masks them.
pub fn extract_pages(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|err| Error::Extraction {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    Ok(split_pages(&text))
}

/// Split extracted text into pages on the form-feed (`\x0C`) separators
/// that `pdf-extract` inserts between pages.
pub fn split_pages(text: &str) -> Vec<String> {
    text.split('\x0C').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_form_feed() {
        let pages = split_pages("first page\x0Csecond page\x0Cthird");
        assert_eq!(pages, vec!["first page", "second page", "third"]);
    }

    #[test]
    fn test_no_form_feed_is_a_single_page() {
        let pages = split_pages("just one page of text");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], "just one page of text");
    }

    #[test]
    fn test_trailing_form_feed_leaves_an_empty_page() {
        // A trailing separator produces an empty final page; the chunker
        // emits zero chunks for it, so nothing leaks into the output.
        let pages = split_pages("page one\x0C");
        assert_eq!(pages, vec!["page one", ""]);
    }

    #[test]
    fn test_page_text_is_not_modified() {
        let pages = split_pages("  spaced  \n\nlines \x0C next ");
        assert_eq!(pages[0], "  spaced  \n\nlines ");
        assert_eq!(pages[1], " next ");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = extract_pages(Path::new("/nonexistent/file.pdf")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
