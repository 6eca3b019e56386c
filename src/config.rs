//! Tokenizer configuration loader (C8)
//!
//! Deserializes a `tokenizer.json`-shaped document — a `model` section
//! carrying the vocabulary and ordered merge rules, plus a top-level
//! `added_tokens` list — into the pieces [`crate::tokenizer::Tokenizer`]
//! needs. Not part of the distilled pipeline spec, but required for a
//! crate a caller can actually point at a file; see `SPEC_FULL.md` §9.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::added_vocab::AddedToken;
use crate::{Error, TokenId, Tokenizer};

#[derive(Debug, Deserialize)]
struct TokenizerFile {
    model: BpeModelSection,
    #[serde(default)]
    added_tokens: Vec<AddedTokenEntry>,
}

#[derive(Debug, Deserialize)]
struct BpeModelSection {
    vocab: HashMap<String, TokenId>,
    merges: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AddedTokenEntry {
    id: TokenId,
    content: String,
    #[serde(default)]
    special: bool,
}

/// Build a [`Tokenizer`] from an already-loaded JSON document.
pub fn load_from_str(json: &str) -> Result<Tokenizer, Error> {
    let file: TokenizerFile = serde_json::from_str(json)?;
    let added_tokens = file
        .added_tokens
        .into_iter()
        .map(|t| AddedToken { id: t.id, content: t.content, special: t.special })
        .collect();
    Tokenizer::new(file.model.vocab, file.model.merges, added_tokens)
}

/// Build a [`Tokenizer`] from a configuration file on disk.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Tokenizer, Error> {
    let json = std::fs::read_to_string(path)?;
    load_from_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_minimal_document() {
        let json = r#"{
            "model": {
                "vocab": {"a": 0, "b": 1, "ab": 2},
                "merges": ["a b"]
            },
            "added_tokens": [
                {"id": 3, "content": "<|endoftext|>", "special": true}
            ]
        }"#;
        let tok = load_from_str(json).unwrap();
        assert_eq!(tok.vocab_size(), 3);
    }

    #[test]
    fn missing_model_section_is_json_error() {
        let json = r#"{"added_tokens": []}"#;
        assert!(matches!(load_from_str(json), Err(Error::Json(_))));
    }

    #[test]
    fn added_tokens_default_to_empty() {
        let json = r#"{"model": {"vocab": {"a": 0}, "merges": []}}"#;
        assert!(load_from_str(json).is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/path/tokenizer.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn loads_from_a_real_file_on_disk() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "model": {
                    "vocab": {"a": 0, "b": 1, "ab": 2},
                    "merges": ["a b"]
                },
                "added_tokens": [
                    {"id": 3, "content": "<|endoftext|>", "special": true}
                ]
            }"#,
        )
        .unwrap();
        file.flush().unwrap();

        let tok = load_from_file(file.path()).unwrap();
        assert_eq!(tok.vocab_size(), 3);
        let ids = tok.encode("ab<|endoftext|>", true).unwrap();
        assert_eq!(ids, vec![2, 3]);
    }
}
