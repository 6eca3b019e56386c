//! # bpetok
//!
//! A pure-Rust, GPT-2-style byte-pair-encoding tokenizer: NFC
//! normalization, regex pre-tokenization, a byte↔codepoint remap that
//! lets arbitrary bytes flow through as text, rank-driven bigram
//! merging, and a symmetric decode path with invalid-UTF-8 repair. An
//! added-vocabulary adapter layers exact-match special tokens on top.
//!
//! ## Example
//!
//! ```no_run
//! use bpetok::config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tokenizer = config::load_from_file("tokenizer.json")?;
//!
//! let tokens = tokenizer.encode("Hello world", true)?;
//! let bytes = tokenizer.decode(&tokens, true, true)?;
//! assert_eq!(bytes, b"Hello world");
//! # Ok(())
//! # }
//! ```

pub mod added_vocab;
pub mod byte_encoder;
pub mod config;
mod invariants;
pub mod merge;
pub mod normalizer;
pub mod pretokenizer;
pub mod tokenizer;
pub mod vocab;

mod error;

pub use error::Error;
pub use tokenizer::Tokenizer;
pub use vocab::Vocabulary;

/// Maximum input text size in bytes (10MB), guarding against runaway
/// allocation on pathological input.
pub const MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

/// Maximum output tokens per `encode` call, guarding against memory
/// exhaustion from a degenerate merge table.
pub const MAX_OUTPUT_TOKENS: usize = 1_000_000;

/// Token ID type used throughout the library. `u32` comfortably covers
/// any realistic vocabulary size.
pub type TokenId = u32;
