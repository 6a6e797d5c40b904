//! Transcript chunking for the size-limited summarization endpoint.

/// Maximum characters per summarization chunk.
pub const MAX_CHUNK_CHARS: usize = 1024;

/// Split text into contiguous chunks of at most `max_chars` characters.
///
/// Order preserving, no overlap; the last chunk may be shorter. Counts
/// characters, not bytes, so multi-byte input never splits mid-character.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_chunk_lengths() {
        let text: String = "a".repeat(2050);
        let chunks = chunk_text(&text, MAX_CHUNK_CHARS);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 1024);
        assert_eq!(chunks[1].len(), 1024);
        assert_eq!(chunks[2].len(), 2);
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk_text("hello world", MAX_CHUNK_CHARS);
        assert_eq!(chunks, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_empty_text_no_chunks() {
        assert!(chunk_text("", MAX_CHUNK_CHARS).is_empty());
    }

    #[test]
    fn test_order_preserved_no_overlap() {
        let text = "abcdefghij";
        let chunks = chunk_text(text, 3);
        assert_eq!(chunks, vec!["abc", "def", "ghi", "j"]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let text: String = "é".repeat(5);
        let chunks = chunk_text(&text, 2);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 2);
        assert_eq!(chunks[2].chars().count(), 1);
    }
}
