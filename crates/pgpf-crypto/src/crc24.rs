//! CRC24 checksum, RFC 4880 §6.1.

use std::hash::Hasher;

use pgpf_types::{be3, from_base64, to_base64, u24_from_be, DataError, DataResult};
use tracing::debug;

const CRC24_INIT: u32 = 0xB7_04CE;
const CRC24_POLY: u32 = 0x186_4CFB;
const CRC24_MASK: u32 = 0xFF_FFFF;

/// Incremental CRC24 over one armored payload.
///
/// Feeding the payload in any number of chunks yields the same value as a
/// single call to [`Crc24::generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc24 {
    crc: u32,
}

impl Crc24 {
    pub const fn new() -> Self {
        Self { crc: CRC24_INIT }
    }

    /// Checksum of `bytes` in one call.
    pub fn generate(bytes: &[u8]) -> u32 {
        let mut crc = Self::new();
        crc.update(bytes);
        crc.value()
    }

    /// Fold more payload bytes into the register.
    pub fn update(&mut self, bytes: &[u8]) {
        let mut crc = self.crc;
        for &octet in bytes {
            crc ^= u32::from(octet) << 16;
            for _ in 0..8 {
                crc <<= 1;
                if crc & 0x100_0000 != 0 {
                    crc ^= CRC24_POLY;
                }
            }
        }
        self.crc = crc & CRC24_MASK;
    }

    /// The 24-bit checksum of everything fed so far.
    pub fn value(&self) -> u32 {
        self.crc & CRC24_MASK
    }

    /// The checksum as 3 big-endian bytes.
    pub fn checksum(&self) -> [u8; 3] {
        be3(self.value())
    }
}

impl Default for Crc24 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Crc24 {
    fn finish(&self) -> u64 {
        u64::from(self.value())
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// The 3-byte big-endian CRC24 of `bytes`.
pub fn crc24_checksum(bytes: &[u8]) -> [u8; 3] {
    be3(Crc24::generate(bytes))
}

/// The armor trailer line for `bytes`: `=` followed by the base64 checksum.
pub fn armor_checksum_line(bytes: &[u8]) -> String {
    format!("={}", to_base64(&crc24_checksum(bytes), false))
}

/// Check an armor trailer line against the decoded payload.
///
/// The leading `=` and surrounding whitespace are optional. A line that does
/// not decode to exactly three bytes fails with [`DataError::Encoding`]; a
/// well-formed line with the wrong value fails with [`DataError::Checksum`].
pub fn verify_armor_checksum(bytes: &[u8], line: &str) -> DataResult<()> {
    let encoded = line.trim();
    let encoded = encoded.strip_prefix('=').unwrap_or(encoded);
    let decoded = from_base64(encoded)?;
    let expected: [u8; 3] = decoded
        .as_slice()
        .try_into()
        .map_err(|_| DataError::Encoding)?;

    let expected = u24_from_be(expected);
    let actual = Crc24::generate(bytes);
    if expected != actual {
        debug!(expected, actual, len = bytes.len(), "armor checksum mismatch");
        return Err(DataError::Checksum { expected, actual });
    }
    Ok(())
}
