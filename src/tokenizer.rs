//! Tokenizers that split input text into the units SIFT4 compares.
//!
//! Every tokenizer borrows from its input, so tokenizing never copies text.
//! The distance engine treats the tokenizer as a black box; any function with
//! the signature `for<'a> Fn(&'a str) -> Vec<&'a str>` can be plugged in.
//!
//! # Available Tokenizers
//!
//! - [`chars`] - One token per Unicode scalar value (the default)
//! - [`graphemes`] - One token per extended grapheme cluster
//! - [`words`] - Unicode words (UAX #29), punctuation dropped
//! - [`whitespace`] - Splits on whitespace
//! - [`ngrams`] - Overlapping character n-grams
//!
//! # Examples
//!
//! ```
//! use sift4::tokenizer::{self, TokenizerKind};
//!
//! assert_eq!(tokenizer::chars("héllo"), vec!["h", "é", "l", "l", "o"]);
//! assert_eq!(tokenizer::ngrams("abcd", 2), vec!["ab", "bc", "cd"]);
//!
//! let kind: TokenizerKind = "words".parse().unwrap();
//! assert_eq!(kind.tokenize("Hello, world!"), vec!["Hello", "world"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Result, Sift4Error};

/// Split text into single characters.
pub fn chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(start, ch)| &text[start..start + ch.len_utf8()])
        .collect()
}

/// Split text into extended grapheme clusters.
///
/// Unlike [`chars`], a base letter followed by combining marks stays one token.
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Split text into Unicode words, dropping punctuation and whitespace.
pub fn words(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Split text on runs of whitespace.
pub fn whitespace(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into overlapping character n-grams.
///
/// Text shorter than `n` characters becomes a single token. Empty text or
/// `n == 0` yields no tokens.
pub fn ngrams(text: &str, n: usize) -> Vec<&str> {
    if n == 0 || text.is_empty() {
        return Vec::new();
    }

    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(start, _)| start)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    if char_count < n {
        return vec![text];
    }

    (0..=char_count - n)
        .map(|i| &text[boundaries[i]..boundaries[i + n]])
        .collect()
}

/// The built-in tokenizers, selectable by name from configuration files and
/// the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// See [`chars`].
    #[default]
    Chars,
    /// See [`graphemes`].
    Graphemes,
    /// See [`words`].
    Words,
    /// See [`whitespace`].
    Whitespace,
    /// See [`ngrams`]; the value is the n-gram size.
    Ngrams(usize),
}

impl TokenizerKind {
    /// Tokenize text with this tokenizer.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match *self {
            TokenizerKind::Chars => chars(text),
            TokenizerKind::Graphemes => graphemes(text),
            TokenizerKind::Words => words(text),
            TokenizerKind::Whitespace => whitespace(text),
            TokenizerKind::Ngrams(n) => ngrams(text, n),
        }
    }

    /// Get the name of this tokenizer.
    pub fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Chars => "chars",
            TokenizerKind::Graphemes => "graphemes",
            TokenizerKind::Words => "words",
            TokenizerKind::Whitespace => "whitespace",
            TokenizerKind::Ngrams(_) => "ngrams",
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerKind::Ngrams(n) => write!(f, "ngrams:{n}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = Sift4Error;

    /// Parse `chars`, `graphemes`, `words`, `whitespace` or `ngrams:N`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "chars" | "char" => Ok(TokenizerKind::Chars),
            "graphemes" | "grapheme" => Ok(TokenizerKind::Graphemes),
            "words" | "word" => Ok(TokenizerKind::Words),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            _ => {
                let size = s
                    .strip_prefix("ngrams:")
                    .or_else(|| s.strip_prefix("ngram:"))
                    .ok_or_else(|| {
                        Sift4Error::invalid_argument(format!("unknown tokenizer '{s}'"))
                    })?;
                let n = size.parse::<usize>().map_err(|e| {
                    Sift4Error::invalid_argument(format!("invalid n-gram size '{size}': {e}"))
                })?;
                if n == 0 {
                    return Err(Sift4Error::invalid_argument(
                        "n-gram size must be at least 1",
                    ));
                }
                Ok(TokenizerKind::Ngrams(n))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars() {
        assert!(chars("").is_empty());
        assert_eq!(chars("abc"), vec!["a", "b", "c"]);
        assert_eq!(chars("日本"), vec!["日", "本"]);
    }

    #[test]
    fn test_graphemes_keep_combining_marks() {
        // "e" followed by a combining acute accent
        let text = "cafe\u{301}";
        assert_eq!(chars(text).len(), 5);
        assert_eq!(graphemes(text), vec!["c", "a", "f", "e\u{301}"]);
    }

    #[test]
    fn test_words_and_whitespace() {
        assert_eq!(words("Hello, world! 42"), vec!["Hello", "world", "42"]);
        assert_eq!(
            whitespace("  the\tquick\n fox "),
            vec!["the", "quick", "fox"]
        );
        assert!(whitespace("   ").is_empty());
    }

    #[test]
    fn test_ngrams() {
        assert_eq!(ngrams("kitten", 2), vec!["ki", "it", "tt", "te", "en"]);
        assert_eq!(ngrams("abc", 3), vec!["abc"]);
        assert_eq!(ngrams("ab", 3), vec!["ab"]);
        assert_eq!(ngrams("ñandú", 4), vec!["ñand", "andú"]);
        assert!(ngrams("", 2).is_empty());
        assert!(ngrams("abc", 0).is_empty());
    }

    #[test]
    fn test_tokenizer_kind_parse() {
        assert_eq!(
            "chars".parse::<TokenizerKind>().unwrap(),
            TokenizerKind::Chars
        );
        assert_eq!(
            " Words ".parse::<TokenizerKind>().unwrap(),
            TokenizerKind::Words
        );
        assert_eq!(
            "ngrams:3".parse::<TokenizerKind>().unwrap(),
            TokenizerKind::Ngrams(3)
        );
        assert_eq!(
            "ngram:2".parse::<TokenizerKind>().unwrap(),
            TokenizerKind::Ngrams(2)
        );
        assert!("ngrams:0".parse::<TokenizerKind>().is_err());
        assert!("ngrams:x".parse::<TokenizerKind>().is_err());
        assert!("syllables".parse::<TokenizerKind>().is_err());
    }

    #[test]
    fn test_tokenizer_kind_display_round_trips() {
        for kind in [
            TokenizerKind::Chars,
            TokenizerKind::Graphemes,
            TokenizerKind::Words,
            TokenizerKind::Whitespace,
            TokenizerKind::Ngrams(3),
        ] {
            assert_eq!(kind.to_string().parse::<TokenizerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_tokenizer_kind_serde() {
        let json = serde_json::to_string(&TokenizerKind::Ngrams(2)).unwrap();
        assert_eq!(json, r#"{"ngrams":2}"#);
        let kind: TokenizerKind = serde_json::from_str(r#""graphemes""#).unwrap();
        assert_eq!(kind, TokenizerKind::Graphemes);
    }
}
