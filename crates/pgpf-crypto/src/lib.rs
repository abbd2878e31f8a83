//! Checksums and digests for OpenPGP data.
//!
//! Provides the RFC 4880 §6.1 CRC24 used in ASCII-armor trailers and the
//! SHA family hash provider that higher layers use for signatures and
//! fingerprints.
//!
//! Hashing wraps the RustCrypto implementations; there is no custom cryptography.
//! CRC24 is an error-detection code, not a cryptographic checksum.

pub mod crc24;
pub mod hasher;

pub use crc24::{armor_checksum_line, crc24_checksum, verify_armor_checksum, Crc24};
pub use hasher::{DigestHasher, HashAlgorithm, HashProvider};
