use ipfetch_cid::{CidVersion, ContentId, encode_v0};
use tracing::error;

use crate::error::{Result, VerificationError};
use crate::hasher::Sha256Hasher;

/// Check that `bytes` are the content named by `cid`.
///
/// Version-0 identifiers embed a SHA2-256 multihash which is compared
/// byte-for-byte against the digest of `bytes`. Version-1 identifiers are
/// always rejected.
pub fn verify_content(cid: &ContentId, bytes: &[u8]) -> Result<()> {
    verify_digest(cid, &Sha256Hasher::digest(bytes))
}

/// Like [`verify_content`] for a digest that was already computed while streaming.
pub fn verify_digest(cid: &ContentId, actual: &[u8; 32]) -> Result<()> {
    if cid.version() == CidVersion::V1 {
        error!(%cid, "refusing content for unverifiable v1 identifier");
        return Err(VerificationError::Unsupported {
            cid:     cid.to_string(),
            version: CidVersion::V1,
        });
    }

    let expected = cid
        .multihash()
        .map_err(|source| VerificationError::MalformedIdentifier {
            cid: cid.to_string(),
            source,
        })?;

    if expected.digest() != actual {
        error!(%cid, "content digest mismatch");
        return Err(VerificationError::Mismatch {
            cid:      cid.to_string(),
            expected: hex::encode(expected.digest()),
            actual:   hex::encode(actual),
        });
    }

    Ok(())
}

/// The version-0 identifier under which `bytes` verify.
pub fn content_id_v0(bytes: &[u8]) -> ContentId {
    encode_v0(Sha256Hasher::digest(bytes))
}
