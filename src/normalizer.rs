//! NFC Unicode normalization
//!
//! Canonical decomposition followed by canonical composition, applied to
//! input text before pre-tokenization. Backed by `unicode-normalization`,
//! whose `nfc()` is a pure, infallible iterator transform, so this module
//! has no error path of its own — `Error::UnicodeFailure` (§7) exists for
//! the pre-tokenizer's regex engine, not for this step.

use unicode_normalization::UnicodeNormalization;

/// Normalize `text` to NFC.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)` for all `x`.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idempotent() {
        let samples = ["plain ascii", "e\u{0301}", "é", "Hello, 🤖!", "ﬁnally"];
        for s in samples {
            let once = normalize(s);
            let twice = normalize(&once);
            assert_eq!(once, twice, "normalize not idempotent for {s:?}");
        }
    }

    #[test]
    fn composes_combining_accent() {
        // "e" + combining acute accent (U+0301) composes to "é" (U+00E9).
        assert_eq!(normalize("e\u{0301}"), "\u{00E9}");
    }

    #[test]
    fn already_composed_is_unchanged() {
        assert_eq!(normalize("café"), "café");
    }
}
