use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::gateway::{DEFAULT_GATEWAYS, GatewayEndpoint};
use crate::error::{Error, Result};

/// Largest response body accepted from any source: 10 MiB.
pub const DEFAULT_MAX_RESPONSE_BYTES: u64 = 10 * 1024 * 1024;

/// Hard deadline for a single gateway attempt.
pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(15);

/// Delay before the next gateway is started speculatively.
pub const DEFAULT_HEDGE_DELAY: Duration = Duration::from_millis(2000);

/// Maximum number of gateway attempts in flight at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 3;

/// Where content is fetched from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProviderMode {
    /// Race the configured public gateways.
    #[default]
    Gateways,

    /// Stream from one node the caller controls, e.g. `http://127.0.0.1:5001`.
    Node { endpoint: String },
}

/// Process-wide retrieval settings.
///
/// Durations are written as milliseconds in serialized form:
///
/// ```toml
/// gateways = ["https://ipfs.io/ipfs/", "https://dweb.link/ipfs/"]
/// max_response_bytes = 1048576
/// gateway_timeout_ms = 10000
/// hedge_delay_ms = 2000
/// max_concurrent = 3
///
/// [provider]
/// mode = "gateways"
/// ```
///
/// # Examples
///
/// ```
/// use ipfetch_fetch::RetrievalConfig;
/// use std::time::Duration;
///
/// let config = RetrievalConfig::default()
///     .gateways(["https://ipfs.io/ipfs/"])
///     .hedge_delay(Duration::from_millis(500))
///     .max_concurrent(2);
/// config.validate().unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Gateway prefixes in priority order.
    pub gateways: Vec<GatewayEndpoint>,

    /// Byte ceiling applied to every response in every mode.
    pub max_response_bytes: u64,

    #[serde(rename = "gateway_timeout_ms", with = "millis")]
    pub gateway_timeout: Duration,

    #[serde(rename = "hedge_delay_ms", with = "millis")]
    pub hedge_delay: Duration,

    pub max_concurrent: usize,

    // Kept last: it serializes as a TOML table.
    pub provider: ProviderMode,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            gateways:           DEFAULT_GATEWAYS
                .iter()
                .copied()
                .map(GatewayEndpoint::from)
                .collect(),
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            gateway_timeout:    DEFAULT_GATEWAY_TIMEOUT,
            hedge_delay:        DEFAULT_HEDGE_DELAY,
            max_concurrent:     DEFAULT_MAX_CONCURRENT,
            provider:           ProviderMode::Gateways,
        }
    }
}

impl RetrievalConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Replace the gateway list.
    #[must_use]
    pub fn gateways<I, G>(mut self, gateways: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GatewayEndpoint>,
    {
        self.gateways = gateways.into_iter().map(Into::into).collect();
        self
    }

    /// Switch to single-node mode.
    #[must_use]
    pub fn node(mut self, endpoint: impl Into<String>) -> Self {
        self.provider = ProviderMode::Node {
            endpoint: endpoint.into(),
        };
        self
    }

    #[must_use]
    pub fn max_response_bytes(mut self, max_response_bytes: u64) -> Self {
        self.max_response_bytes = max_response_bytes;
        self
    }

    #[must_use]
    pub fn gateway_timeout(mut self, gateway_timeout: Duration) -> Self {
        self.gateway_timeout = gateway_timeout;
        self
    }

    #[must_use]
    pub fn hedge_delay(mut self, hedge_delay: Duration) -> Self {
        self.hedge_delay = hedge_delay;
        self
    }

    #[must_use]
    pub fn max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// Check the settings before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent == 0 {
            return Err(Error::Config("max_concurrent must be at least 1".into()));
        }
        if self.max_response_bytes == 0 {
            return Err(Error::Config("max_response_bytes must be at least 1".into()));
        }
        if self.gateway_timeout.is_zero() {
            return Err(Error::Config("gateway_timeout must be non-zero".into()));
        }

        match &self.provider {
            ProviderMode::Gateways => {
                if self.gateways.is_empty() {
                    return Err(Error::Config("no gateways configured".into()));
                }
                for gateway in &self.gateways {
                    check_http_url("gateway", gateway.as_str())?;
                }
            }
            ProviderMode::Node { endpoint } => check_http_url("node endpoint", endpoint)?,
        }

        Ok(())
    }

    pub fn hedge_policy(&self) -> HedgePolicy {
        HedgePolicy {
            gateway_timeout:    self.gateway_timeout,
            hedge_delay:        self.hedge_delay,
            max_concurrent:     self.max_concurrent,
            max_response_bytes: self.max_response_bytes,
        }
    }
}

/// The subset of [`RetrievalConfig`] that drives one hedged race.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HedgePolicy {
    pub gateway_timeout:    Duration,
    pub hedge_delay:        Duration,
    pub max_concurrent:     usize,
    pub max_response_bytes: u64,
}

impl Default for HedgePolicy {
    fn default() -> Self {
        RetrievalConfig::default().hedge_policy()
    }
}

fn check_http_url(what: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw).map_err(|e| Error::Config(format!("{what} '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "{what} '{raw}' must use http or https, not '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(Error::Config(format!("{what} '{raw}' has no host")));
    }
    Ok(())
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
