use std::fmt;
use std::hash::{Hash, Hasher};

use pgpf_types::{be2, bit_len, from_hex, pad_prepended_zeros, to_hex, DataError, DataResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An unsigned multiprecision integer in canonical big-endian form.
///
/// Values built with [`MpInt::from_raw_bytes`] never carry a leading zero
/// byte; zero is the empty byte string. Values read off the wire by a
/// permissive decoder keep the bytes exactly as they were framed, but
/// equality and hashing only look at the significant bytes: two values are
/// equal exactly when they encode to the same wire form.
#[derive(Clone, Default)]
pub struct MpInt {
    data: Vec<u8>,
}

impl MpInt {
    /// Largest bit length the 16-bit wire prefix can express.
    pub const MAX_BITS: usize = u16::MAX as usize;

    /// Build from big-endian integer bytes, dropping leading zero bytes.
    pub fn from_raw_bytes(bytes: &[u8]) -> Self {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        Self {
            data: bytes[start..].to_vec(),
        }
    }

    /// Wrap bytes framed by a wire prefix without normalizing them.
    pub(crate) fn from_wire_body(body: &[u8]) -> Self {
        Self {
            data: body.to_vec(),
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// The raw big-endian bytes, without a length prefix.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Minimal number of bits needed to represent the value.
    pub fn bit_len(&self) -> usize {
        bit_len(&self.data)
    }

    /// The 2-byte big-endian bit-length prefix of the wire form.
    pub fn length_prefix(&self) -> DataResult<[u8; 2]> {
        let bits = self.bit_len();
        if bits > Self::MAX_BITS {
            return Err(DataError::TooLong(bits));
        }
        Ok(be2(bits as u32))
    }

    /// Size of the wire form: the prefix plus `ceil(bit_len / 8)` bytes.
    pub fn wire_byte_length(&self) -> usize {
        2 + (self.bit_len() + 7) / 8
    }

    /// Encode to the wire form.
    ///
    /// For canonical values the raw bytes follow the prefix verbatim. A value
    /// decoded from an over-declared frame is canonicalised: its leading zero
    /// bytes are dropped, so the output is always `wire_byte_length()` long.
    pub fn encode(&self) -> DataResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.wire_byte_length());
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Append the wire form to `out`. Nothing is written on error.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> DataResult<()> {
        let prefix = self.length_prefix()?;
        out.extend_from_slice(&prefix);
        out.extend_from_slice(self.significant_bytes());
        Ok(())
    }

    /// Decode one MPI with the default configuration.
    pub fn decode(buf: &[u8]) -> DataResult<(Self, usize)> {
        crate::decode(buf)
    }

    /// The raw bytes left-padded with zeros to `width` bytes.
    ///
    /// Values wider than `width` are returned whole.
    pub fn to_padded(&self, width: usize) -> Vec<u8> {
        pad_prepended_zeros(self.significant_bytes(), width)
    }

    fn significant_bytes(&self) -> &[u8] {
        let len = (self.bit_len() + 7) / 8;
        &self.data[self.data.len() - len..]
    }
}

impl PartialEq for MpInt {
    fn eq(&self, other: &Self) -> bool {
        self.significant_bytes() == other.significant_bytes()
    }
}

impl Eq for MpInt {}

impl Hash for MpInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_bytes().hash(state);
    }
}

impl From<&[u8]> for MpInt {
    fn from(bytes: &[u8]) -> Self {
        Self::from_raw_bytes(bytes)
    }
}

impl From<Vec<u8>> for MpInt {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_raw_bytes(&bytes)
    }
}

impl AsRef<[u8]> for MpInt {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for MpInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MpInt({})", to_hex(&self.data))
    }
}

impl fmt::Display for MpInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.data))
    }
}

impl Serialize for MpInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(&self.data))
    }
}

impl<'de> Deserialize<'de> for MpInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = from_hex(&text).map_err(serde::de::Error::custom)?;
        Ok(Self::from_raw_bytes(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_leading_zeros() {
        let mpi = MpInt::from_raw_bytes(&[0x00, 0x00, 0x01, 0x02]);
        assert_eq!(mpi.as_bytes(), &[0x01, 0x02]);
        assert_eq!(mpi.bit_len(), 9);
    }

    #[test]
    fn zero_is_empty() {
        let mpi = MpInt::from_raw_bytes(&[0x00, 0x00]);
        assert!(mpi.as_bytes().is_empty());
        assert!(mpi.is_zero());
        assert_eq!(mpi, MpInt::zero());
        assert_eq!(mpi.bit_len(), 0);
        assert_eq!(mpi.wire_byte_length(), 2);
        assert_eq!(mpi.encode().unwrap(), vec![0x00, 0x00]);
    }

    #[test]
    fn encode_single_byte_values() {
        assert_eq!(MpInt::from_raw_bytes(&[0x01]).encode().unwrap(), vec![0x00, 0x01, 0x01]);
        assert_eq!(MpInt::from_raw_bytes(&[0xFF]).encode().unwrap(), vec![0x00, 0x08, 0xFF]);
    }

    #[test]
    fn encode_rfc_example() {
        // RFC 4880 §3.2: the value 511 is [00 09 01 FF].
        let mpi = MpInt::from_raw_bytes(&[0x01, 0xFF]);
        assert_eq!(mpi.length_prefix().unwrap(), [0x00, 0x09]);
        assert_eq!(mpi.encode().unwrap(), vec![0x00, 0x09, 0x01, 0xFF]);
        assert_eq!(mpi.wire_byte_length(), 4);
    }

    #[test]
    fn encode_into_appends() {
        let mut out = vec![0xAA];
        MpInt::from_raw_bytes(&[0x01]).encode_into(&mut out).unwrap();
        assert_eq!(out, vec![0xAA, 0x00, 0x01, 0x01]);
    }

    #[test]
    fn largest_encodable_value() {
        let mut bytes = vec![0x7F];
        bytes.extend(std::iter::repeat(0xFF).take(8191));
        let mpi = MpInt::from_raw_bytes(&bytes);
        assert_eq!(mpi.bit_len(), MpInt::MAX_BITS);
        assert_eq!(mpi.length_prefix().unwrap(), [0xFF, 0xFF]);
        assert_eq!(mpi.encode().unwrap().len(), mpi.wire_byte_length());
    }

    #[test]
    fn too_many_bits_to_encode() {
        let mpi = MpInt::from_raw_bytes(&[0xFF; 8192]);
        assert_eq!(mpi.encode(), Err(DataError::TooLong(65536)));
        assert_eq!(mpi.length_prefix(), Err(DataError::TooLong(65536)));

        let mut out = vec![0x01];
        assert!(mpi.encode_into(&mut out).is_err());
        assert_eq!(out, vec![0x01]);
    }

    #[test]
    fn padded_to_field_width() {
        let mpi = MpInt::from_raw_bytes(&[0x00, 0xAB, 0xCD]);
        assert_eq!(mpi.to_padded(4), vec![0x00, 0x00, 0xAB, 0xCD]);
        assert_eq!(mpi.to_padded(1), vec![0xAB, 0xCD]);
        assert_eq!(MpInt::zero().to_padded(2), vec![0x00, 0x00]);
    }

    #[test]
    fn conversions() {
        let from_slice = MpInt::from(&[0x00, 0x05][..]);
        let from_vec = MpInt::from(vec![0x05]);
        assert_eq!(from_slice, from_vec);
        assert_eq!(from_vec.as_ref(), &[0x05]);
        assert_eq!(from_vec.into_bytes(), vec![0x05]);
    }

    #[test]
    fn display_and_debug_are_hex() {
        let mpi = MpInt::from_raw_bytes(&[0x01, 0xAB]);
        assert_eq!(mpi.to_string(), "01ab");
        assert_eq!(format!("{mpi:?}"), "MpInt(01ab)");
    }

    #[test]
    fn serde_roundtrip() {
        let mpi = MpInt::from_raw_bytes(&[0x01, 0x00, 0xFF]);
        let json = serde_json::to_string(&mpi).unwrap();
        assert_eq!(json, "\"0100ff\"");
        let parsed: MpInt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mpi);
    }

    #[test]
    fn serde_rejects_bad_hex() {
        assert!(serde_json::from_str::<MpInt>("\"0g\"").is_err());
    }

    proptest! {
        #[test]
        fn canonical_after_construction(zeros in 0usize..4, body in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut bytes = vec![0u8; zeros];
            bytes.extend_from_slice(&body);
            let mpi = MpInt::from_raw_bytes(&bytes);
            prop_assert!(mpi.as_bytes().first() != Some(&0));
            prop_assert_eq!(mpi.bit_len(), bit_len(&bytes));
            prop_assert_eq!(mpi.wire_byte_length(), 2 + mpi.as_bytes().len());
        }
    }
}
