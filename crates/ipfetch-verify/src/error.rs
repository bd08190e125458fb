use ipfetch_cid::CidVersion;

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("content digest mismatch for {cid}: expected {expected}, got {actual}")]
    Mismatch {
        cid:      String,
        expected: String,
        actual:   String,
    },

    #[error("identifier {cid} does not carry a valid sha2-256 multihash: {source}")]
    MalformedIdentifier {
        cid:    String,
        source: ipfetch_cid::Error,
    },

    #[error("cannot verify {version} identifier {cid}; refusing unverified content")]
    Unsupported { cid: String, version: CidVersion },
}

pub type Result<T> = std::result::Result<T, VerificationError>;
