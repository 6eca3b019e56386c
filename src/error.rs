//! Crate-wide error type (§7)

use crate::TokenId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Vocabulary or merge-table construction failed: empty vocab,
    /// duplicate token ids, a merge rule missing its separating space,
    /// or a duplicate merge rule.
    #[error("tokenizer configuration malformed: {0}")]
    ConfigMalformed(String),

    /// The pre-tokenization regex failed to compile or match.
    #[error("unicode/regex failure: {0}")]
    UnicodeFailure(String),

    /// Encode produced a sub-token absent from the vocabulary.
    #[error("encode produced a sub-token not in the vocabulary: {0:?}")]
    UnknownToken(String),

    /// Decode saw a token id absent from the reverse vocabulary.
    #[error("decode saw an unknown token id: {0}")]
    CorruptId(TokenId),

    /// Decode saw a codepoint absent from the inverse byte map.
    #[error("decode saw a codepoint not in the byte-remap: U+{0:04X}")]
    CorruptToken(u32),

    /// Reading a tokenizer configuration file from disk failed.
    #[error("I/O error loading tokenizer configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The tokenizer configuration file was not valid JSON, or did not
    /// match the expected shape.
    #[error("invalid tokenizer configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
