//! Strict UTF-8 decoding of document bytes.
//!
//! Uses encoding_rs without BOM handling so the decoded text is exactly the
//! file's bytes; a leading BOM survives as U+FEFF and is written back as-is.

use encoding_rs::UTF_8;

/// Decode `data` as UTF-8. Returns `None` on any malformed sequence instead
/// of substituting replacement characters.
pub fn decode_utf8(data: &[u8]) -> Option<String> {
    UTF_8
        .decode_without_bom_handling_and_without_replacement(data)
        .map(|text| text.into_owned())
}
