//! Property-based tests for tokenizer invariants (§8, properties 2 and 3),
//! run against the synthetic byte-level vocabulary since no model file
//! ships with this crate.

mod common;

use common::byte_level_tokenizer;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 3: round-trip holds for arbitrary strings.
    #[test]
    fn prop_round_trip_is_exact(text in "\\PC{0,200}") {
        let tokenizer = byte_level_tokenizer();
        let ids = tokenizer.encode(&text, true).unwrap();
        let bytes = tokenizer.decode(&ids, true, true).unwrap();
        let decoded = String::from_utf8(bytes).unwrap();
        let normalized = bpetok::normalizer::normalize(&text);
        prop_assert_eq!(decoded, normalized);
    }

    /// Property: every produced token id is within vocabulary bounds.
    #[test]
    fn prop_token_ids_in_bounds(text in "\\PC{0,200}") {
        let tokenizer = byte_level_tokenizer();
        let ids = tokenizer.encode(&text, true).unwrap();
        let vocab_size = tokenizer.vocab_size();
        for id in &ids {
            prop_assert!((*id as usize) < vocab_size);
        }
    }

    /// Empty input produces empty output.
    #[test]
    fn prop_empty_input_is_empty_output(_dummy in Just(())) {
        let tokenizer = byte_level_tokenizer();
        let ids = tokenizer.encode("", true).unwrap();
        prop_assert!(ids.is_empty());
    }
}
