//! Validated content identifiers.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::multihash::Multihash;
use crate::normalize::normalize;

static V0_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Qm[1-9A-HJ-NP-Za-km-z]{44}$").unwrap());

/// Longest identifier accepted, in bytes.
pub const MAX_CID_LEN: usize = 200;

static V1_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^b[a-z2-7]{58,199}$").unwrap());

/// Identifier shape, decided once at validation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CidVersion {
    V0,
    V1,
}

impl fmt::Display for CidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CidVersion::V0 => write!(f, "v0"),
            CidVersion::V1 => write!(f, "v1"),
        }
    }
}

/// A bare content identifier that passed shape validation.
///
/// Only the characters allowed by the two accepted alphabets can appear, so the
/// value is safe to splice into a URL or request path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentId {
    value: String,
    version: CidVersion,
}

impl ContentId {
    /// Validate a bare identifier.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::Empty);
        }
        if s.len() > MAX_CID_LEN {
            return Err(Error::TooLong {
                len: s.len(),
                max: MAX_CID_LEN,
            });
        }

        let version = if V0_REGEX.is_match(s) {
            CidVersion::V0
        } else if V1_REGEX.is_match(s) {
            CidVersion::V1
        } else {
            return Err(Error::InvalidFormat(s.to_string()));
        };

        Ok(Self {
            value: s.to_string(),
            version,
        })
    }

    /// Normalize caller input (`ipfs://` scheme, trailing path) and validate it.
    pub fn from_input(input: &str) -> Result<Self> {
        Self::parse(normalize(input).cid)
    }

    pub(crate) fn from_multihash(multihash: &Multihash) -> Self {
        Self {
            value: multihash.to_base58(),
            version: CidVersion::V0,
        }
    }

    pub fn version(&self) -> CidVersion {
        self.version
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }

    /// Decode the embedded multihash. Only version-0 identifiers carry one here.
    pub fn multihash(&self) -> Result<Multihash> {
        match self.version {
            CidVersion::V0 => Multihash::from_base58(&self.value),
            CidVersion::V1 => Err(Error::NotV0),
        }
    }
}

impl FromStr for ContentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ContentId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ContentId> for String {
    fn from(cid: ContentId) -> Self {
        cid.value
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
