use std::fmt;

use ipfetch_cid::ContentId;
use serde::{Deserialize, Serialize};

use crate::core::gateway_url;

/// Public gateways tried when no list is configured, highest priority first.
pub const DEFAULT_GATEWAYS: &[&str] = &[
    "https://ipfs.io/ipfs/",
    "https://dweb.link/ipfs/",
    "https://cloudflare-ipfs.com/ipfs/",
    "https://gateway.pinata.cloud/ipfs/",
];

/// A gateway URL prefix. The identifier is appended verbatim after encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayEndpoint(String);

impl GatewayEndpoint {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bind this gateway to an identifier.
    pub fn url_for(&self, cid: &ContentId) -> String {
        gateway_url(&self.0, cid)
    }
}

impl From<&str> for GatewayEndpoint {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

impl From<String> for GatewayEndpoint {
    fn from(base: String) -> Self {
        Self(base)
    }
}

impl fmt::Display for GatewayEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
