//! Tokenizer facade (C6)
//!
//! Wires the byte-remap, normalizer, pre-tokenizer, merge engine,
//! vocabulary, and added-vocabulary adapter into the two public
//! operations, `encode` and `decode`, plus the rayon-parallel
//! `encode_batch` (§5's one sanctioned internal parallelism point).

use rayon::prelude::*;

use crate::added_vocab::{AddedVocabAdapter, Span};
use crate::invariants;
use crate::merge::{self, MergeTable};
use crate::pretokenizer::PreTokenizer;
use crate::vocab::Vocabulary;
use crate::{byte_encoder, normalizer, Error, TokenId, MAX_INPUT_SIZE, MAX_OUTPUT_TOKENS};

pub struct Tokenizer {
    vocab: Vocabulary,
    merges: MergeTable,
    pretokenizer: PreTokenizer,
    added_vocab: AddedVocabAdapter,
}

impl Tokenizer {
    /// Assemble a tokenizer from a vocabulary map, an ordered merge-rule
    /// list, and any added (special) tokens (§3, §6).
    pub fn new(
        vocab: std::collections::HashMap<String, TokenId>,
        merge_lines: Vec<String>,
        added_tokens: Vec<crate::added_vocab::AddedToken>,
    ) -> Result<Self, Error> {
        let vocab = Vocabulary::new(vocab)?;
        let merges = MergeTable::new(&merge::parse_merge_rules(&merge_lines)?)?;
        let pretokenizer = PreTokenizer::new()?;
        let added_vocab = AddedVocabAdapter::new(added_tokens)?;

        for id in added_vocab.ids() {
            if vocab.token(id).is_some() {
                return Err(Error::ConfigMalformed(format!(
                    "added token id {id} collides with a base vocabulary id"
                )));
            }
        }

        Ok(Self { vocab, merges, pretokenizer, added_vocab })
    }

    /// Encode `text` into token ids (§4).
    ///
    /// When `allow_special` is false, literal occurrences of special
    /// added tokens are tokenized as ordinary text instead of being
    /// recognized as whole tokens (§5).
    pub fn encode(&self, text: &str, allow_special: bool) -> Result<Vec<TokenId>, Error> {
        if text.len() > MAX_INPUT_SIZE {
            return Err(Error::ConfigMalformed(format!(
                "input of {} bytes exceeds the {MAX_INPUT_SIZE}-byte limit",
                text.len()
            )));
        }

        let mut ids = Vec::new();
        for span in self.added_vocab.split(text, allow_special) {
            match span {
                Span::Token(id) => ids.push(id),
                Span::Text(chunk) => self.encode_plain(chunk, &mut ids)?,
            }
        }

        if ids.len() > MAX_OUTPUT_TOKENS {
            return Err(Error::ConfigMalformed(format!(
                "output of {} tokens exceeds the {MAX_OUTPUT_TOKENS}-token limit",
                ids.len()
            )));
        }

        invariants::assert_tokens_known(&ids, &self.vocab, &self.added_vocab);
        Ok(ids)
    }

    fn encode_plain(&self, text: &str, out: &mut Vec<TokenId>) -> Result<(), Error> {
        let normalized = normalizer::normalize(text);
        let pretokens = self.pretokenizer.pre_tokenize(&normalized)?;

        let mut sub_tokens = Vec::new();
        for pretoken in &pretokens {
            sub_tokens.clear();
            merge::merge_pretoken(pretoken, &self.merges, &mut sub_tokens);
            for sub in &sub_tokens {
                let id = self
                    .vocab
                    .id(sub)
                    .ok_or_else(|| Error::UnknownToken(sub.clone()))?;
                out.push(id);
            }
        }
        Ok(())
    }

    /// Encode with `allow_special = true`, the common case. Rust has no
    /// default arguments, so this stands in for the language-neutral
    /// API's `encode(text, allow_special=true)` (§6, §9).
    pub fn encode_default(&self, text: &str) -> Result<Vec<TokenId>, Error> {
        self.encode(text, true)
    }

    /// Encode multiple texts in parallel, preserving input order (§5).
    pub fn encode_batch(
        &self,
        texts: &[&str],
        allow_special: bool,
    ) -> Result<Vec<Vec<TokenId>>, Error> {
        texts
            .par_iter()
            .map(|text| self.encode(text, allow_special))
            .collect()
    }

    /// Decode token ids back to raw bytes (§4.6).
    ///
    /// Returns a byte buffer rather than a `String` because
    /// `valid_utf8 = false` asks for the raw buffer verbatim even if it
    /// is not valid UTF-8 — a case `String` cannot represent. Pass the
    /// result through [`String::from_utf8`] when `valid_utf8` is true and
    /// a `String` is wanted; it is guaranteed to succeed in that case.
    pub fn decode(
        &self,
        ids: &[TokenId],
        allow_special: bool,
        valid_utf8: bool,
    ) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::new();
        for &id in ids {
            if self.added_vocab.is_added_id(id) {
                if let Some(content) = self.added_vocab.content_for(id, allow_special) {
                    bytes.extend_from_slice(content.as_bytes());
                }
                continue;
            }

            let token = self.vocab.token(id).ok_or(Error::CorruptId(id))?;
            for c in token.chars() {
                let b = byte_encoder::decode_codepoint(c)
                    .ok_or_else(|| Error::CorruptToken(c as u32))?;
                bytes.push(b);
            }
        }

        if valid_utf8 {
            repair_utf8(&mut bytes);
        }
        Ok(bytes)
    }

    /// Decode with `allow_special = true, valid_utf8 = true`, the common
    /// case (§6, §9).
    pub fn decode_default(&self, ids: &[TokenId]) -> Result<Vec<u8>, Error> {
        self.decode(ids, true, true)
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}

/// Replace any invalid UTF-8 sequences in `bytes` in place with the
/// Unicode replacement character's encoding, per §4.6's `valid_utf8`
/// contract (mirrors `testtok.cpp`'s truncated-buffer repair case).
fn repair_utf8(bytes: &mut Vec<u8>) {
    if std::str::from_utf8(bytes).is_ok() {
        return;
    }
    let repaired = String::from_utf8_lossy(bytes).into_owned();
    *bytes = repaired.into_bytes();
}
