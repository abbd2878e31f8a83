//! Hex and base64 text encodings.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::error::{DataError, DataResult};

/// Standard-alphabet decoder that tolerates missing padding and non-zero
/// trailing bits. Padding is stripped before decoding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Lowercase hex, two digits per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Uppercase hex for diagnostics: every byte is followed by a single space.
pub fn to_hex_pretty(bytes: &[u8]) -> String {
    let upper = hex::encode_upper(bytes);
    let mut out = String::with_capacity(bytes.len() * 3);
    for pair in upper.as_bytes().chunks(2) {
        out.push(char::from(pair[0]));
        out.push(char::from(pair[1]));
        out.push(' ');
    }
    out
}

/// Parse a hex string (either case) back into bytes.
pub fn from_hex(text: &str) -> DataResult<Vec<u8>> {
    hex::decode(text).map_err(|_| DataError::Encoding)
}

/// Standard padded base64. With `url_encoded`, `+` becomes `-` and `/`
/// becomes `_`; padding is kept.
pub fn to_base64(bytes: &[u8], url_encoded: bool) -> String {
    let encoded = STANDARD.encode(bytes);
    if url_encoded {
        encoded.replace('/', "_").replace('+', "-")
    } else {
        encoded
    }
}

/// Decode standard or URL-safe base64.
///
/// Characters outside the base64 alphabet (whitespace, line breaks, stray
/// punctuation) are skipped. `=` is padding and ends the data: only more
/// padding may follow it. Empty text decodes to no bytes; text with no
/// decodable content left, alphabet characters after padding, or otherwise
/// malformed content fails with [`DataError::Encoding`].
pub fn from_base64(text: &str) -> DataResult<Vec<u8>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut filtered: String = text
        .chars()
        .map(|c| match c {
            '_' => '/',
            '-' => '+',
            other => other,
        })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();

    if let Some(pad) = filtered.find('=') {
        if filtered[pad..].chars().any(|c| c != '=') {
            return Err(DataError::Encoding);
        }
        filtered.truncate(pad);
    }

    if filtered.is_empty() {
        return Err(DataError::Encoding);
    }

    LENIENT.decode(filtered).map_err(|_| DataError::Encoding)
}
