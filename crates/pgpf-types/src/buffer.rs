//! Padding, bounded slicing and length fields over byte buffers.

use std::ops::Range;

use crate::endian::be4;
use crate::error::{DataError, DataResult};

/// Prepend zero bytes to `data` so that the result is `len` bytes long.
///
/// Data that is already `len` bytes or longer is returned unchanged; this
/// never truncates.
pub fn pad_prepended_zeros(data: &[u8], len: usize) -> Vec<u8> {
    let missing = len.saturating_sub(data.len());
    let mut padded = Vec::with_capacity(missing + data.len());
    padded.resize(missing, 0);
    padded.extend_from_slice(data);
    padded
}

/// Extract `buf[range]` without risking an out-of-bounds panic.
///
/// Fails with [`DataError::Range`] unless the buffer holds at least
/// `range.end` bytes and at least one byte at `range.start`. An inverted
/// range fails the same way.
pub fn safe_subdata(buf: &[u8], range: Range<usize>) -> DataResult<&[u8]> {
    let Range { start, end } = range;
    if start >= buf.len() || end > buf.len() || start > end {
        return Err(DataError::Range(start, end));
    }
    Ok(&buf[start..end])
}

/// The length of `data` as a 4-byte big-endian field.
pub fn length_prefix_be4(data: &[u8]) -> DataResult<[u8; 4]> {
    let len = u32::try_from(data.len()).map_err(|_| DataError::Range(0, data.len()))?;
    Ok(be4(len))
}

/// Decimal rendering of each byte, for diagnostics.
pub fn byte_array(data: &[u8]) -> Vec<String> {
    data.iter().map(|b| b.to_string()).collect()
}
