//! Fixed-width big-endian integer fields.
//!
//! OpenPGP stores lengths, bit counts and checksums most-significant byte
//! first. The encoders take a `u32` and keep only as many low-order bytes as
//! the field is wide; higher bits are dropped.

/// Encode the low 16 bits of `value` as 2 big-endian bytes.
pub fn be2(value: u32) -> [u8; 2] {
    [(value >> 8) as u8, value as u8]
}

/// Encode the low 24 bits of `value` as 3 big-endian bytes.
pub fn be3(value: u32) -> [u8; 3] {
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

/// Encode `value` as 4 big-endian bytes.
pub fn be4(value: u32) -> [u8; 4] {
    [
        (value >> 24) as u8,
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ]
}

/// Decode a 2-byte big-endian field.
pub fn u16_from_be(bytes: [u8; 2]) -> u16 {
    (u16::from(bytes[0]) << 8) | u16::from(bytes[1])
}

/// Decode a 3-byte big-endian field, such as a CRC24 checksum.
pub fn u24_from_be(bytes: [u8; 3]) -> u32 {
    read_be_u32(&bytes)
}

/// Decode a 4-byte big-endian field.
pub fn u32_from_be(bytes: [u8; 4]) -> u32 {
    read_be_u32(&bytes)
}

/// Decode a big-endian unsigned integer of up to four bytes.
///
/// An empty slice decodes to 0. For longer slices only the last four bytes
/// are significant.
pub fn read_be_u32(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_most_significant_byte_first() {
        assert_eq!(be2(0x0102), [0x01, 0x02]);
        assert_eq!(be3(0x010203), [0x01, 0x02, 0x03]);
        assert_eq!(be4(0x01020304), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn narrow_fields_drop_high_bits() {
        assert_eq!(be2(0x00AB_CDEF), [0xCD, 0xEF]);
        assert_eq!(be3(0xFFAB_CDEF), [0xAB, 0xCD, 0xEF]);
    }

    #[test]
    fn decodes_fixed_widths() {
        assert_eq!(u16_from_be([0x12, 0x34]), 0x1234);
        assert_eq!(u24_from_be([0xB7, 0x04, 0xCE]), 0xB704CE);
        assert_eq!(u32_from_be([0xDE, 0xAD, 0xBE, 0xEF]), 0xDEAD_BEEF);
    }

    #[test]
    fn read_be_u32_variable_width() {
        assert_eq!(read_be_u32(&[]), 0);
        assert_eq!(read_be_u32(&[0x09]), 9);
        assert_eq!(read_be_u32(&[0x00, 0x09]), 9);
        assert_eq!(read_be_u32(&[0x01, 0x00, 0x00]), 0x10000);
    }

    #[test]
    fn read_be_u32_keeps_last_four_bytes() {
        assert_eq!(read_be_u32(&[0xFF, 0x01, 0x02, 0x03, 0x04]), 0x01020304);
    }

    #[test]
    fn encode_decode_inverse() {
        for value in [0u32, 1, 0xFF, 0x100, 0xFFFF, 0x12_3456, u32::MAX] {
            assert_eq!(u32_from_be(be4(value)), value);
            assert_eq!(u24_from_be(be3(value)), value & 0xFF_FFFF);
            assert_eq!(u32::from(u16_from_be(be2(value))), value & 0xFFFF);
        }
    }
}
