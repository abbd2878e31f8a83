//! OpenPGP multiprecision integers (RFC 4880 §3.2).
//!
//! An MPI travels as a two-byte big-endian *bit* count followed by the
//! integer's minimal big-endian bytes. [`MpInt`] owns the canonical value and
//! [`MpiCodec`] reads and writes the wire form.

pub mod codec;
pub mod config;
pub mod mpint;

pub use codec::MpiCodec;
pub use config::{DecodePolicy, MpiConfig};
pub use mpint::MpInt;

use pgpf_types::DataResult;

/// Decode one MPI with the default (permissive) configuration.
///
/// Returns the value and the number of bytes consumed.
pub fn decode(buf: &[u8]) -> DataResult<(MpInt, usize)> {
    MpiCodec::default().decode(buf)
}

/// Decode `count` consecutive MPIs with the default configuration.
pub fn decode_many(buf: &[u8], count: usize) -> DataResult<(Vec<MpInt>, usize)> {
    MpiCodec::default().decode_many(buf, count)
}
