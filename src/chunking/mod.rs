//! Document chunker.
//!
//! Splits extracted page text into fixed-size titled snippets that are sent
//! to the chat model as grounding documents. Boundaries are purely
//! positional (character count), so a word may be split across two snippets;
//! that is intended, keep it. Titles come from the 1-indexed page and part
//! numbers, which makes them stable citation keys within a document.

use serde::Serialize;

use crate::error::{Error, Result};

/// Default snippet size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// A titled snippet of page text, in the `{title, snippet}` shape the chat
/// API expects as a grounding document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    pub title: String,
    pub snippet: String,
}

/// Split one page's text into consecutive non-overlapping snippets of
/// `chunk_size` characters. The last snippet takes the remainder; an empty
/// page yields no chunks.
///
/// Counts characters, not bytes, so snippet boundaries never land inside a
/// UTF-8 code point. Callers go through [`chunk_pages`], which rejects a
/// zero chunk size.
pub fn chunk_page(page_number: usize, text: &str, chunk_size: usize) -> Vec<Chunk> {
    debug_assert!(chunk_size > 0);

    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut taken = 0usize;
    let mut part = 1usize;

    for (offset, _) in text.char_indices() {
        if taken == chunk_size {
            chunks.push(make_chunk(page_number, part, &text[start..offset]));
            start = offset;
            taken = 0;
            part += 1;
        }
        taken += 1;
    }

    if start < text.len() {
        chunks.push(make_chunk(page_number, part, &text[start..]));
    }

    chunks
}

/// Chunk an ordered sequence of page texts. Pages are 1-indexed in the
/// emitted titles; output preserves page order, then part order, so
/// concatenating a page's snippets reconstructs that page exactly.
pub fn chunk_pages(pages: &[String], chunk_size: usize) -> Result<Vec<Chunk>> {
    if chunk_size == 0 {
        return Err(Error::InvalidInput("chunk size must be positive".into()));
    }

    Ok(pages
        .iter()
        .enumerate()
        .flat_map(|(i, text)| chunk_page(i + 1, text, chunk_size))
        .collect())
}

fn make_chunk(page: usize, part: usize, snippet: &str) -> Chunk {
    Chunk {
        title: format!("Page {} Part {}", page, part),
        snippet: snippet.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_page_yields_no_chunks() {
        assert!(chunk_page(1, "", 1000).is_empty());
    }

    #[test]
    fn test_page_shorter_than_chunk_size_is_one_chunk() {
        let chunks = chunk_page(1, "short text", 1000);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].title, "Page 1 Part 1");
        assert_eq!(chunks[0].snippet, "short text");
    }

    #[test]
    fn test_page_of_exactly_chunk_size_is_one_chunk() {
        let text = "x".repeat(1000);
        let chunks = chunk_page(1, &text, 1000);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].snippet.len(), 1000);
    }

    #[test]
    fn test_snippets_reconstruct_the_page() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        let chunks = chunk_page(3, &text, 250);

        let rebuilt: String = chunks.iter().map(|c| c.snippet.as_str()).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_all_snippets_full_except_possibly_last() {
        let text = "a".repeat(2345);
        let chunks = chunk_page(1, &text, 500);

        assert_eq!(chunks.len(), 5);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.snippet.chars().count(), 500);
        }
        let last = chunks.last().unwrap();
        let last_len = last.snippet.chars().count();
        assert!(last_len >= 1 && last_len <= 500, "last chunk was {}", last_len);
    }

    #[test]
    fn test_boundaries_are_positional_not_word_aware() {
        // 6-char words with a 4-char chunk size must split mid-word.
        let chunks = chunk_page(1, "abcdef ghijkl", 4);
        assert_eq!(chunks[0].snippet, "abcd");
        assert_eq!(chunks[1].snippet, "ef g");
    }

    #[test]
    fn test_multibyte_text_splits_on_char_boundaries() {
        let text = "héllo wörld ".repeat(30);
        let chunks = chunk_page(1, &text, 7);

        let rebuilt: String = chunks.iter().map(|c| c.snippet.as_str()).collect();
        assert_eq!(rebuilt, text);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.snippet.chars().count(), 7);
        }
    }

    #[test]
    fn test_chunk_pages_end_to_end() {
        // Page 1: 2500 chars -> 3 chunks (1000/1000/500). Page 2: empty -> 0.
        let pages = vec!["z".repeat(2500), String::new()];
        let chunks = chunk_pages(&pages, 1000).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].title, "Page 1 Part 1");
        assert_eq!(chunks[1].title, "Page 1 Part 2");
        assert_eq!(chunks[2].title, "Page 1 Part 3");
        assert_eq!(chunks[0].snippet.len(), 1000);
        assert_eq!(chunks[1].snippet.len(), 1000);
        assert_eq!(chunks[2].snippet.len(), 500);
    }

    #[test]
    fn test_titles_unique_across_pages() {
        let pages = vec!["a".repeat(300), "b".repeat(300), "c".repeat(50)];
        let chunks = chunk_pages(&pages, 100).unwrap();

        let titles: HashSet<&str> = chunks.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles.len(), chunks.len());
    }

    #[test]
    fn test_zero_chunk_size_is_invalid_input() {
        let pages = vec!["some text".to_string()];
        let err = chunk_pages(&pages, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_chunk_serializes_as_title_and_snippet() {
        let chunk = Chunk {
            title: "Page 1 Part 1".to_string(),
            snippet: "hello".to_string(),
        };
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["title"], "Page 1 Part 1");
        assert_eq!(json["snippet"], "hello");
    }
}
