use std::fmt;

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Hash algorithms a [`HashProvider`] must support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, weakest first.
    pub const ALL: [Self; 4] = [Self::Sha1, Self::Sha256, Self::Sha384, Self::Sha512];

    /// RFC 4880 §9.4 algorithm identifier.
    pub fn id(&self) -> u8 {
        match self {
            Self::Sha1 => 2,
            Self::Sha256 => 8,
            Self::Sha384 => 9,
            Self::Sha512 => 10,
        }
    }

    /// Parse an RFC 4880 algorithm identifier.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            2 => Some(Self::Sha1),
            8 => Some(Self::Sha256),
            9 => Some(Self::Sha384),
            10 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Digest size in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of message digests.
///
/// The OpenPGP codecs never hash anything themselves; signature and
/// fingerprint code receives a provider and asks it for digests.
pub trait HashProvider: Send + Sync {
    /// Digest of `data` under `algorithm`.
    fn hash(&self, data: &[u8], algorithm: HashAlgorithm) -> Vec<u8>;

    /// Check that `data` hashes to `expected`.
    fn verify(&self, data: &[u8], algorithm: HashAlgorithm, expected: &[u8]) -> bool {
        self.hash(data, algorithm) == expected
    }
}

/// [`HashProvider`] backed by the RustCrypto `sha1` and `sha2` crates.
#[derive(Clone, Copy, Debug, Default)]
pub struct DigestHasher;

impl DigestHasher {
    /// One-shot digest without constructing a provider.
    pub fn digest(data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
        match algorithm {
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

impl HashProvider for DigestHasher {
    fn hash(&self, data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
        Self::digest(data, algorithm)
    }
}
