use std::sync::Arc;

use bytes::Bytes;
use ipfetch_cid::ContentId;

use crate::data::{ProviderMode, RetrievalConfig};
use crate::effects::hedged::HedgedFetcher;
use crate::effects::http::HttpClient;
use crate::effects::node::NodeFetcher;
use crate::error::Result;

/// How bytes for an identifier are obtained. Chosen once from configuration.
pub enum RetrievalStrategy<C> {
    Gateways(HedgedFetcher<C>),
    Node(NodeFetcher<C>),
}

impl<C: HttpClient> RetrievalStrategy<C> {
    pub fn from_config(client: Arc<C>, config: &RetrievalConfig) -> Self {
        match &config.provider {
            ProviderMode::Gateways => RetrievalStrategy::Gateways(HedgedFetcher::new(
                client,
                config.gateways.clone(),
                config.hedge_policy(),
            )),
            ProviderMode::Node { endpoint } => RetrievalStrategy::Node(NodeFetcher::new(
                client,
                endpoint.clone(),
                config.gateway_timeout,
                config.max_response_bytes,
            )),
        }
    }

    /// Fetch unverified bytes.
    pub async fn fetch(&self, cid: &ContentId) -> Result<Bytes> {
        match self {
            RetrievalStrategy::Gateways(fetcher) => fetcher.fetch(cid).await,
            RetrievalStrategy::Node(fetcher) => fetcher.fetch(cid).await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RetrievalStrategy::Gateways(_) => "gateways",
            RetrievalStrategy::Node(_) => "node",
        }
    }
}
