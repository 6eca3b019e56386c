//! Added-Vocabulary Adapter (C7)
//!
//! Wraps the core pipeline with exact-string special-token handling:
//! on encode, literal matches of added tokens are spliced out of the
//! text before the rest runs through normalization/pre-tokenization/
//! merging; on decode, added-token ids are spliced back in as their
//! literal string, bypassing the byte-remap entirely.
//!
//! Grounded in `original_source/bpe.h`'s `AdditionalVocabAdapter`: a
//! list of `{id, content, special}` triples matched by a single
//! alternation regex built from the escaped contents, longest first so a
//! longer added token shadows a shorter one that is its prefix.

use std::collections::HashMap;

use crate::{Error, TokenId};

#[derive(Debug, Clone)]
pub struct AddedToken {
    pub id: TokenId,
    pub content: String,
    /// Special tokens are omitted from encode/decode output unless the
    /// caller passes `allow_special = true` (§5).
    pub special: bool,
}

pub struct AddedVocabAdapter {
    tokens: Vec<AddedToken>,
    by_content: HashMap<String, usize>,
    by_id: HashMap<TokenId, usize>,
    matcher: Option<regex::Regex>,
}

impl AddedVocabAdapter {
    /// Build from a list of added tokens. An empty list is a valid,
    /// no-op adapter (most configurations have none).
    pub fn new(tokens: Vec<AddedToken>) -> Result<Self, Error> {
        let mut by_content = HashMap::with_capacity(tokens.len());
        let mut by_id = HashMap::with_capacity(tokens.len());
        for (idx, tok) in tokens.iter().enumerate() {
            if by_content.insert(tok.content.clone(), idx).is_some() {
                return Err(Error::ConfigMalformed(format!(
                    "duplicate added token content: {:?}",
                    tok.content
                )));
            }
            by_id.insert(tok.id, idx);
        }

        let matcher = if tokens.is_empty() {
            None
        } else {
            let mut ordered: Vec<&AddedToken> = tokens.iter().collect();
            ordered.sort_by_key(|t| std::cmp::Reverse(t.content.len()));
            let alternation = ordered
                .iter()
                .map(|t| regex::escape(&t.content))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                regex::Regex::new(&alternation)
                    .map_err(|e| Error::UnicodeFailure(format!("added-vocab pattern: {e}")))?,
            )
        };

        Ok(Self { tokens, by_content, by_id, matcher })
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Split `text` into alternating plain-text and added-token spans, in
    /// input order. Plain spans still need the rest of the pipeline;
    /// added-token spans resolve directly to their id.
    ///
    /// When `allow_special` is false, special-token matches are treated
    /// as ordinary text instead of being spliced out (§5).
    pub fn split<'a>(&self, text: &'a str, allow_special: bool) -> Vec<Span<'a>> {
        let Some(matcher) = &self.matcher else {
            return vec![Span::Text(text)];
        };

        let mut spans = Vec::new();
        let mut last = 0;
        for m in matcher.find_iter(text) {
            let idx = self.by_content[m.as_str()];
            let tok = &self.tokens[idx];
            if tok.special && !allow_special {
                continue;
            }
            if m.start() > last {
                spans.push(Span::Text(&text[last..m.start()]));
            }
            spans.push(Span::Token(tok.id));
            last = m.end();
        }
        if last < text.len() {
            spans.push(Span::Text(&text[last..]));
        }
        spans
    }

    /// Look up an added token's literal content by id, honoring
    /// `allow_special` the same way `split` does on encode.
    pub fn content_for(&self, id: TokenId, allow_special: bool) -> Option<&str> {
        let tok = &self.tokens[*self.by_id.get(&id)?];
        if tok.special && !allow_special {
            None
        } else {
            Some(tok.content.as_str())
        }
    }

    pub fn is_added_id(&self, id: TokenId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All ids registered as added tokens, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.by_id.keys().copied()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Span<'a> {
    Text(&'a str),
    Token(TokenId),
}
