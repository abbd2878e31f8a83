use pgpf_types::{bit_len, u16_from_be, DataError, DataResult};
use tracing::{debug, trace};

use crate::config::{DecodePolicy, MpiConfig};
use crate::mpint::MpInt;

/// Reads and writes MPIs in their wire form:
/// `[2 bytes: bit length (big-endian)][ceil(bits / 8) bytes: value]`.
#[derive(Clone, Debug, Default)]
pub struct MpiCodec {
    config: MpiConfig,
}

impl MpiCodec {
    pub fn new(config: MpiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MpiConfig {
        &self.config
    }

    /// Decode one MPI from the front of `buf`. Returns (value, bytes_consumed).
    ///
    /// Fails with [`DataError::TooShort`] carrying `buf.len()` when the prefix
    /// or the declared value does not fit in the buffer. Under
    /// [`DecodePolicy::Strict`] a declared bit length that differs from the
    /// value's actual bit length fails with [`DataError::BitLengthMismatch`].
    pub fn decode(&self, buf: &[u8]) -> DataResult<(MpInt, usize)> {
        if buf.len() < 2 {
            trace!(len = buf.len(), "MPI prefix truncated");
            return Err(DataError::TooShort(buf.len()));
        }

        let declared = u16_from_be([buf[0], buf[1]]);
        let total = 2 + (usize::from(declared) + 7) / 8;
        let Some(body) = buf.get(2..total) else {
            debug!(declared, needed = total, available = buf.len(), "MPI body truncated");
            return Err(DataError::TooShort(buf.len()));
        };

        if self.config.policy == DecodePolicy::Strict {
            let actual = bit_len(body);
            if actual != usize::from(declared) {
                debug!(declared, actual, "MPI bit length mismatch");
                return Err(DataError::BitLengthMismatch { declared, actual });
            }
        }

        Ok((MpInt::from_wire_body(body), total))
    }

    /// Decode `count` consecutive MPIs. Returns (values, total_bytes_consumed).
    ///
    /// Errors report the length of the buffer remaining at the failing MPI.
    pub fn decode_many(&self, buf: &[u8], count: usize) -> DataResult<(Vec<MpInt>, usize)> {
        // `count` is untrusted; grow with the decoded input.
        let mut values = Vec::new();
        let mut offset = 0;
        for _ in 0..count {
            let (mpi, used) = self.decode(&buf[offset..])?;
            values.push(mpi);
            offset += used;
        }
        Ok((values, offset))
    }

    /// Encode a sequence of MPIs back to back.
    pub fn encode_all<'a>(values: impl IntoIterator<Item = &'a MpInt>) -> DataResult<Vec<u8>> {
        let mut out = Vec::new();
        for mpi in values {
            mpi.encode_into(&mut out)?;
        }
        Ok(out)
    }
}
