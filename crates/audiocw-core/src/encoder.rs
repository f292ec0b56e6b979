//! Text to Morse encoding.
//!
//! Splits input text into whitespace-delimited words and renders each word
//! as a dot/dash string with single-space letter-boundary markers. The
//! marker is inserted positionally after every attempted character except
//! the last of the word, so an unsupported character still consumes a
//! marker position while contributing no symbols. This keeps the downstream
//! silence timing stable regardless of which characters were mapped.

use crate::morse;

/// One input word rendered as dots, dashes, and letter-boundary spaces.
///
/// Immutable once built. May be empty of symbols when every character of
/// the source word was unsupported; such a word still occupies its position
/// in the sequence so word-gap silence is emitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedWord(String);

impl EncodedWord {
    /// The rendered dot/dash string, letter boundaries marked with `' '`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of dot/dash symbols in this word (boundary markers excluded).
    pub fn symbol_count(&self) -> usize {
        self.0.chars().filter(|&c| c != ' ').count()
    }
}

/// Ordered sequence of encoded words, one per input token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedText {
    words: Vec<EncodedWord>,
}

impl EncodedText {
    /// The encoded words in input order.
    pub fn words(&self) -> &[EncodedWord] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the input contained no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Encodes raw text into an [`EncodedText`].
///
/// Never fails: unsupported characters are silently skipped, and text with
/// no words yields an empty result.
pub fn encode(text: &str) -> EncodedText {
    let words = text.split_whitespace().map(encode_word).collect();
    EncodedText { words }
}

fn encode_word(word: &str) -> EncodedWord {
    let len = word.chars().count();
    let mut rendered = String::new();

    for (i, c) in word.chars().enumerate() {
        if let Some(seq) = morse::lookup(c) {
            rendered.extend(seq.iter().map(morse::MorseSymbol::render));
        }
        // Boundary marker per attempted character, skipping the last.
        if i + 1 != len {
            rendered.push(' ');
        }
    }

    EncodedWord(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word_strs(text: &EncodedText) -> Vec<&str> {
        text.words().iter().map(EncodedWord::as_str).collect()
    }

    #[test]
    fn test_single_word() {
        let text = encode("SOS");
        assert_eq!(word_strs(&text), vec!["... --- ..."]);
    }

    #[test]
    fn test_lowercase_input() {
        assert_eq!(encode("sos"), encode("SOS"));
    }

    #[test]
    fn test_multiple_words_preserve_order() {
        let text = encode("CQ DE N0CALL");
        assert_eq!(
            word_strs(&text),
            vec!["-.-. --.-", "-.. .", "-. ----- -.-. .- .-.. .-.."]
        );
    }

    #[test]
    fn test_whitespace_runs_and_padding() {
        let text = encode("  hi \t there\n");
        assert_eq!(text.len(), 2);
        assert_eq!(text.words()[0].as_str(), ".... ..");
    }

    #[test]
    fn test_empty_input() {
        assert!(encode("").is_empty());
        assert!(encode("   \t\n  ").is_empty());
    }

    #[test]
    fn test_unsupported_char_keeps_marker_position() {
        // '#' maps to nothing but still consumes its marker slot, leaving
        // two adjacent spaces between the neighbouring letters.
        let text = encode("a#b");
        assert_eq!(word_strs(&text), vec![".-  -..."]);
    }

    #[test]
    fn test_trailing_unsupported_char() {
        // Last character contributes neither symbols nor a marker.
        let text = encode("ab#");
        assert_eq!(word_strs(&text), vec![".- -... "]);
    }

    #[test]
    fn test_all_unsupported_word_keeps_position() {
        let text = encode("hi ### ok");
        assert_eq!(text.len(), 3);
        assert_eq!(text.words()[1].as_str(), "  ");
        assert_eq!(text.words()[1].symbol_count(), 0);
    }

    #[test]
    fn test_symbol_count_ignores_markers() {
        let text = encode("sos");
        assert_eq!(text.words()[0].symbol_count(), 9);
    }

    #[test]
    fn test_punctuation_word() {
        let text = encode("73!");
        assert_eq!(word_strs(&text), vec!["--... ...-- -.-.--"]);
    }
}
