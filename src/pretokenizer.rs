//! Regex-based pre-tokenization (C3)
//!
//! Splits NFC-normalized text into word-like chunks with the GPT-2 legacy
//! pattern, then remaps each chunk's UTF-8 bytes through the byte↔codepoint
//! table (C1) into a codepoint string — the pre-token the merge engine
//! (C4) consumes.
//!
//! The pattern needs a negative lookahead (`(?!\S)`), which the `regex`
//! crate cannot express, so pre-tokenization uses `fancy-regex`. The
//! pattern is compiled once at construction (not lazily on first use) so a
//! shared `Tokenizer` never races on interior regex state, per the
//! reference's documented pitfall of a lazily-built, mutably-shared
//! matcher.

use crate::byte_encoder;
use crate::Error;

const PATTERN: &str = r"'s|'t|'re|'ve|'m|'ll|'d| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+(?!\S)|\s+";

pub struct PreTokenizer {
    regex: fancy_regex::Regex,
}

impl PreTokenizer {
    pub fn new() -> Result<Self, Error> {
        let regex = fancy_regex::Regex::new(PATTERN)
            .map_err(|e| Error::UnicodeFailure(format!("pre-tokenizer pattern: {e}")))?;
        Ok(Self { regex })
    }

    /// Split `text` into raw (pre byte-remap) match slices, in input order.
    fn matches<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, Error> {
        let mut out = Vec::new();
        for m in self.regex.find_iter(text) {
            let m = m.map_err(|e| Error::UnicodeFailure(format!("pre-tokenizer match: {e}")))?;
            out.push(m.as_str());
        }
        Ok(out)
    }

    /// Pre-tokenize `text`: regex-split, then byte-remap each match into a
    /// pre-token (§4.3). Matches are emitted in input order.
    pub fn pre_tokenize(&self, text: &str) -> Result<Vec<String>, Error> {
        self.matches(text)
            .map(|ms| ms.into_iter().map(byte_encoder::encode_bytes).collect())
    }
}
