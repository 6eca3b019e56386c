//! Vocabulary Index (C5)
//!
//! Bidirectional map between codepoint-string tokens and integer ids,
//! built once at construction and read-only for the tokenizer's lifetime.

use std::collections::HashMap;

use crate::{Error, TokenId};

pub struct Vocabulary {
    token_to_id: HashMap<String, TokenId>,
    id_to_token: HashMap<TokenId, String>,
}

impl Vocabulary {
    /// Build from an externally-supplied `token string -> id` map (§6).
    ///
    /// Fails with `Error::ConfigMalformed` if the vocabulary is empty or
    /// if two distinct token strings share an id (the reverse map must be
    /// total over the ids appearing in the forward map, per §3).
    pub fn new(token_to_id: HashMap<String, TokenId>) -> Result<Self, Error> {
        if token_to_id.is_empty() {
            return Err(Error::ConfigMalformed("vocabulary is empty".to_string()));
        }

        let mut id_to_token = HashMap::with_capacity(token_to_id.len());
        for (token, &id) in &token_to_id {
            if let Some(existing) = id_to_token.insert(id, token.clone()) {
                return Err(Error::ConfigMalformed(format!(
                    "token id {id} is shared by \"{existing}\" and \"{token}\""
                )));
            }
        }

        Ok(Self { token_to_id, id_to_token })
    }

    pub fn id(&self, token: &str) -> Option<TokenId> {
        self.token_to_id.get(token).copied()
    }

    pub fn token(&self, id: TokenId) -> Option<&str> {
        self.id_to_token.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(pairs: &[(&str, TokenId)]) -> HashMap<String, TokenId> {
        pairs.iter().map(|(t, id)| (t.to_string(), *id)).collect()
    }

    #[test]
    fn empty_vocab_is_config_malformed() {
        assert!(matches!(
            Vocabulary::new(HashMap::new()),
            Err(Error::ConfigMalformed(_))
        ));
    }

    #[test]
    fn forward_and_reverse_lookup_agree() {
        let v = Vocabulary::new(vocab(&[("a", 0), ("b", 1)])).unwrap();
        assert_eq!(v.id("a"), Some(0));
        assert_eq!(v.id("b"), Some(1));
        assert_eq!(v.token(0), Some("a"));
        assert_eq!(v.token(1), Some("b"));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn unknown_lookups_are_none() {
        let v = Vocabulary::new(vocab(&[("a", 0)])).unwrap();
        assert_eq!(v.id("missing"), None);
        assert_eq!(v.token(99), None);
    }
}
