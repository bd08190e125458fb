#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("empty content identifier")]
    Empty,

    #[error("content identifier is {len} bytes, longer than the {max}-byte maximum")]
    TooLong { len: usize, max: usize },

    #[error("invalid content identifier format: '{0}'")]
    InvalidFormat(String),

    #[error("identifier is not valid base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("multihash must be {expected} bytes, got {actual}")]
    MultihashLength { expected: usize, actual: usize },

    #[error("unsupported multihash header {code:#04x}/{len:#04x}, expected sha2-256/32")]
    MultihashHeader { code: u8, len: u8 },

    #[error("version-1 identifiers carry no decodable v0 multihash")]
    NotV0,
}

pub type Result<T> = std::result::Result<T, Error>;
