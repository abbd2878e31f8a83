//! Minimal bit lengths.

/// Number of bits needed to represent `value`, with no leading zero bit.
///
/// `int_bit_len(0) == 0`.
pub fn int_bit_len(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

/// Bit length of a big-endian unsigned integer.
///
/// Leading zero bytes are skipped. An empty or all-zero slice has bit length
/// 0; otherwise the result is the bit length of the first non-zero byte plus
/// eight bits for every byte after it.
pub fn bit_len(bytes: &[u8]) -> usize {
    match bytes.iter().position(|&b| b != 0) {
        Some(first) => {
            let remaining = bytes.len() - first - 1;
            int_bit_len(u64::from(bytes[first])) as usize + remaining * 8
        }
        None => 0,
    }
}
