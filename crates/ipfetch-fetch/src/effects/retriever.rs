use std::sync::Arc;

use bytes::Bytes;
use ipfetch_cid::{ContentId, normalize};
use ipfetch_verify::verify_content;
use tracing::{debug, info, warn};

use crate::data::RetrievalConfig;
use crate::effects::http::HttpClient;
use crate::effects::strategy::RetrievalStrategy;
use crate::error::Result;

/// Public entry point: identifier in, verified content out.
///
/// Every call normalizes and validates the input before any request is made,
/// fetches through the configured [`RetrievalStrategy`], and verifies the bytes
/// against the identifier in every mode. Nothing partial or unverified is ever
/// returned.
pub struct Retriever<C> {
    strategy: RetrievalStrategy<C>,
}

impl<C: HttpClient> Retriever<C> {
    pub fn new(client: C, config: RetrievalConfig) -> Result<Self> {
        Self::with_shared_client(Arc::new(client), &config)
    }

    pub fn with_shared_client(client: Arc<C>, config: &RetrievalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            strategy: RetrievalStrategy::from_config(client, config),
        })
    }

    pub fn strategy(&self) -> &RetrievalStrategy<C> {
        &self.strategy
    }

    /// Retrieve `input` and decode it as UTF-8.
    ///
    /// Accepts a bare identifier, `ipfs://<id>` or `ipfs://<id>/<path>`. The
    /// path is ignored and the whole object is returned. Invalid sequences in
    /// verified content become U+FFFD; use [`Retriever::retrieve_bytes`] for
    /// the exact bytes.
    pub async fn retrieve(&self, input: &str) -> Result<String> {
        let bytes = self.retrieve_bytes(input).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Retrieve `input` as raw verified bytes.
    pub async fn retrieve_bytes(&self, input: &str) -> Result<Bytes> {
        let normalized = normalize(input);
        if let Some(path) = normalized.path {
            warn!(input, path, "path after identifier is ignored, fetching whole object");
        }

        let cid = ContentId::parse(normalized.cid)?;
        debug!(%cid, version = %cid.version(), strategy = self.strategy.name(), "retrieving");

        let bytes = self.strategy.fetch(&cid).await?;
        verify_content(&cid, &bytes)?;

        info!(%cid, len = bytes.len(), "content verified");
        Ok(bytes)
    }
}

#[cfg(feature = "reqwest")]
impl Retriever<crate::effects::http::ReqwestClient> {
    /// Build a retriever backed by a redirect-refusing reqwest client.
    pub fn with_reqwest(config: RetrievalConfig) -> Result<Self> {
        Self::new(crate::effects::http::ReqwestClient::new()?, config)
    }
}
