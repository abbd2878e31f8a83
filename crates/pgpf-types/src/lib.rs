//! Byte-level encoding primitives for OpenPGP (RFC 4880) data.
//!
//! This crate provides the fixed-width and text encodings that the checksum
//! and multiprecision-integer codecs are built from. Every other `pgpf` crate
//! depends on `pgpf-types`.
//!
//! # Modules
//!
//! - [`endian`]: 2/3/4-byte big-endian integer fields
//! - [`bits`]: minimal bit length of integers and byte strings
//! - [`buffer`]: zero padding, bounded sub-buffer extraction, length fields
//! - [`text`]: hex, pretty hex and (URL-safe) base64
//! - [`error`]: [`DataError`], shared by every `pgpf` crate

pub mod bits;
pub mod buffer;
pub mod endian;
pub mod error;
pub mod text;

pub use bits::{bit_len, int_bit_len};
pub use buffer::{byte_array, length_prefix_be4, pad_prepended_zeros, safe_subdata};
pub use endian::{be2, be3, be4, read_be_u32, u16_from_be, u24_from_be, u32_from_be};
pub use error::{DataError, DataResult};
pub use text::{from_base64, from_hex, to_base64, to_hex, to_hex_pretty};
