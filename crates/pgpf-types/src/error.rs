use thiserror::Error;

/// Errors produced by the OpenPGP data codecs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("malformed or empty encoded text")]
    Encoding,

    /// Reserved for callers that draw key material from a CSPRNG.
    #[error("secure random generation failed")]
    CryptoRandom,

    /// Reserved for callers that compute key fingerprints.
    #[error("fingerprint computation failed")]
    Fingerprint,

    #[error("buffer too short: {0} bytes")]
    TooShort(usize),

    #[error("range {0}..{1} out of bounds")]
    Range(usize, usize),

    #[error("integer of {0} bits does not fit a 16-bit length field")]
    TooLong(usize),

    #[error("declared bit length {declared} does not match actual {actual}")]
    BitLengthMismatch { declared: u16, actual: usize },

    #[error("armor checksum mismatch: expected {expected:06x}, got {actual:06x}")]
    Checksum { expected: u32, actual: u32 },
}

pub type DataResult<T> = Result<T, DataError>;
