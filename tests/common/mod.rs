use std::collections::HashMap;

use bpetok::added_vocab::AddedToken;
use bpetok::byte_encoder;
use bpetok::{Tokenizer, TokenId};

/// A byte-level vocabulary covering every codepoint the byte-remap can
/// produce, with no merge rules — every pre-token decomposes to its raw
/// per-byte codepoints. Sufficient to encode and decode arbitrary text
/// without hitting `UnknownToken`.
pub fn byte_level_tokenizer() -> Tokenizer {
    byte_level_tokenizer_with_added(Vec::new())
}

pub fn byte_level_tokenizer_with_added(added_tokens: Vec<AddedToken>) -> Tokenizer {
    let vocab: HashMap<String, TokenId> = byte_encoder::byte_to_codepoint()
        .values()
        .enumerate()
        .map(|(i, c)| (c.to_string(), i as TokenId))
        .collect();

    Tokenizer::new(vocab, Vec::new(), added_tokens).unwrap()
}
