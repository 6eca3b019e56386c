//! Runtime invariant assertions for tokenizer correctness (§8).
//!
//! Debug-mode-only checks that catch logic errors during development
//! without costing anything in release builds, following the same
//! `#[cfg(debug_assertions)]` / `debug_assert!` pattern the teacher crate
//! uses for its own invariants module.

use crate::{added_vocab::AddedVocabAdapter, byte_encoder, vocab::Vocabulary, TokenId};

/// Asserts the byte↔codepoint table (C1) is a bijection over all 256
/// byte values (§8 property 1).
#[inline]
pub fn assert_byte_map_bijective() {
    #[cfg(debug_assertions)]
    {
        let fwd = byte_encoder::byte_to_codepoint();
        for byte in 0u32..=255 {
            let byte = byte as u8;
            let cp = fwd[&byte];
            debug_assert_eq!(
                byte_encoder::decode_codepoint(cp),
                Some(byte),
                "byte-map invariant violated for byte {byte}"
            );
        }
    }
}

/// Asserts that the minimum merge rank seen within one pre-token's merge
/// loop is non-decreasing across iterations (§8 property 5).
///
/// `history` holds the ranks merged so far this loop; `next_rank` is the
/// rank about to be merged.
#[inline]
pub fn assert_merge_rank_nondecreasing(history: &[usize], next_rank: usize) {
    #[cfg(debug_assertions)]
    {
        if let Some(&last) = history.last() {
            debug_assert!(
                next_rank >= last,
                "merge-rank invariant violated: rank {next_rank} follows {last}"
            );
        }
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (history, next_rank);
    }
}

/// Asserts that every produced token id is present in `vocab` or is a
/// registered added token (an encode postcondition: the merge engine's
/// sub-tokens were all resolved, and added-token spans resolved to their
/// own id table rather than the base vocabulary).
#[inline]
pub fn assert_tokens_known(ids: &[TokenId], vocab: &Vocabulary, added_vocab: &AddedVocabAdapter) {
    #[cfg(debug_assertions)]
    {
        for &id in ids {
            debug_assert!(
                vocab.token(id).is_some() || added_vocab.is_added_id(id),
                "encode postcondition violated: id {id} not in vocabulary or added tokens"
            );
        }
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (ids, vocab, added_vocab);
    }
}
