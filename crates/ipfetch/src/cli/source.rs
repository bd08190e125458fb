use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use ipfetch_fetch::{ProviderMode, RetrievalConfig};

/// Where to fetch from and how hard to try. Flags override the config file.
#[derive(Args, Clone, Debug)]
pub struct SourceArg {
    #[arg(long, short, value_name = "FILE", help = "TOML file with retrieval settings")]
    config: Option<PathBuf>,

    #[arg(
        long = "gateway",
        short,
        value_name = "URL",
        help = "Gateway prefix such as https://ipfs.io/ipfs/, highest priority first (repeatable)"
    )]
    gateways: Vec<String>,

    #[arg(
        long,
        value_name = "URL",
        conflicts_with = "gateways",
        help = "Fetch from this node's HTTP API instead of gateways"
    )]
    node: Option<String>,

    #[arg(long, value_name = "BYTES", help = "Largest response body accepted")]
    max_bytes: Option<u64>,

    #[arg(long, value_name = "MS", help = "Per-attempt timeout in milliseconds")]
    timeout_ms: Option<u64>,

    #[arg(long, value_name = "MS", help = "Delay before starting the next gateway")]
    hedge_ms: Option<u64>,

    #[arg(long, value_name = "N", help = "Most gateway attempts in flight at once")]
    concurrency: Option<usize>,
}

impl SourceArg {
    pub fn load(&self) -> Result<RetrievalConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                RetrievalConfig::from_toml_str(&text)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => RetrievalConfig::default(),
        };

        if !self.gateways.is_empty() {
            config = config.gateways(self.gateways.iter().cloned());
            config.provider = ProviderMode::Gateways;
        }
        if let Some(node) = &self.node {
            config = config.node(node.clone());
        }
        if let Some(max_bytes) = self.max_bytes {
            config = config.max_response_bytes(max_bytes);
        }
        if let Some(ms) = self.timeout_ms {
            config = config.gateway_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = self.hedge_ms {
            config = config.hedge_delay(Duration::from_millis(ms));
        }
        if let Some(n) = self.concurrency {
            config = config.max_concurrent(n);
        }

        config.validate().context("Invalid retrieval settings")?;
        Ok(config)
    }
}
