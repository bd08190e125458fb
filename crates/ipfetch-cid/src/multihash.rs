//! The two-byte-header multihash embedded in version-0 identifiers.

use crate::error::{Error, Result};

/// Multihash function code for SHA2-256.
pub const SHA2_256_CODE: u8 = 0x12;

/// Digest length, in bytes, of SHA2-256.
pub const SHA2_256_LEN: u8 = 0x20;

const ENCODED_LEN: usize = 2 + SHA2_256_LEN as usize;

/// A SHA2-256 multihash: `0x12 0x20` followed by the 32-byte digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Multihash {
    digest: [u8; 32],
}

impl Multihash {
    pub fn from_digest(digest: [u8; 32]) -> Self {
        Self { digest }
    }

    /// Parse raw multihash bytes. Only SHA2-256 with a 32-byte digest is accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ENCODED_LEN {
            return Err(Error::MultihashLength {
                expected: ENCODED_LEN,
                actual: bytes.len(),
            });
        }

        let (code, len) = (bytes[0], bytes[1]);
        if code != SHA2_256_CODE || len != SHA2_256_LEN {
            return Err(Error::MultihashHeader { code, len });
        }

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&bytes[2..]);
        Ok(Self { digest })
    }

    /// Decode a base58btc string (the body of a v0 identifier).
    pub fn from_base58(encoded: &str) -> Result<Self> {
        let bytes = bs58::decode(encoded).into_vec()?;
        Self::from_bytes(&bytes)
    }

    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[0] = SHA2_256_CODE;
        out[1] = SHA2_256_LEN;
        out[2..].copy_from_slice(&self.digest);
        out
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }
}

/// Build the version-0 identifier for a SHA2-256 digest.
pub fn encode_v0(digest: [u8; 32]) -> crate::ContentId {
    crate::ContentId::from_multihash(&Multihash::from_digest(digest))
}
