use serde::{Deserialize, Serialize};

/// How much an MPI decoder trusts the declared bit length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodePolicy {
    /// Take the declared bit length at face value. An over-declared length
    /// is accepted and its extra leading zero bytes are kept.
    #[default]
    Permissive,
    /// Reject values whose bytes do not have exactly the declared bit length.
    Strict,
}

/// Configuration for [`MpiCodec`](crate::MpiCodec).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MpiConfig {
    pub policy: DecodePolicy,
}

impl MpiConfig {
    pub fn permissive() -> Self {
        Self {
            policy: DecodePolicy::Permissive,
        }
    }

    /// Cross-check every declared bit length against the decoded bytes.
    pub fn strict() -> Self {
        Self {
            policy: DecodePolicy::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.policy == DecodePolicy::Strict
    }
}
