//! Byte↔codepoint remap (GPT-2 style byte-level encoding)
//!
//! Maps each of the 256 byte values to a printable Unicode codepoint so
//! arbitrary binary data can flow through the BPE pipeline as ordinary
//! text, while remaining losslessly invertible.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Get the byte→codepoint mapping.
///
/// The "keep" set is `[0x21..=0x7E] ∪ [0xA1..=0xAC] ∪ [0xAE..=0xFF]` (188
/// bytes); those map to themselves. The remaining 68 bytes are assigned
/// codepoints `256..=323` in increasing byte order. This is a
/// process-wide constant: it carries no tokenizer-specific data, so one
/// table serves every `Tokenizer` instance.
pub fn byte_to_codepoint() -> &'static HashMap<u8, char> {
    static TABLE: OnceLock<HashMap<u8, char>> = OnceLock::new();
    TABLE.get_or_init(|| {
        // !"#$%&'()*+,-./0123456789:;<=>?@ABC...XYZ[\]^_`abc...xyz{|}~
        let mut bs: Vec<u32> = Vec::new();
        bs.extend(u32::from(b'!')..=u32::from(b'~'));
        // ¡¢£¤¥¦§¨©ª«
        bs.extend(0xA1..=0xAC);
        // ®¯°±²³´µ¶·¸¹º»¼½¾¿À...ÿ
        bs.extend(0xAE..=0xFF);

        let mut cs = bs.clone();
        let mut n = 0;
        for b in 0u32..256u32 {
            if !bs.contains(&b) {
                bs.push(b);
                cs.push(256 + n);
                n += 1;
            }
        }

        bs.iter()
            .zip(cs.iter())
            .map(|(&byte_val, &cp)| (byte_val as u8, char::from_u32(cp).unwrap()))
            .collect()
    })
}

/// Get the codepoint→byte mapping, the inverse of [`byte_to_codepoint`].
pub fn codepoint_to_byte() -> &'static HashMap<char, u8> {
    static TABLE: OnceLock<HashMap<char, u8>> = OnceLock::new();
    TABLE.get_or_init(|| byte_to_codepoint().iter().map(|(&b, &c)| (c, b)).collect())
}

/// Remap the UTF-8 bytes of `text` into a codepoint string.
///
/// Total over all inputs: every byte has an image under the byte-remap,
/// so this never fails.
#[must_use]
pub fn encode_bytes(text: &str) -> String {
    let table = byte_to_codepoint();
    text.bytes().map(|b| table[&b]).collect()
}

/// Look up the byte preimage of a single remapped codepoint.
///
/// Returns `None` if `c` is not in the image of the byte-remap; callers
/// surface that as `Error::CorruptToken` (§7).
#[must_use]
pub fn decode_codepoint(c: char) -> Option<u8> {
    codepoint_to_byte().get(&c).copied()
}
