use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use ipfetch_cid::ContentId;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::node_cat_url;
use crate::effects::attempt::fetch_once;
use crate::effects::http::{HttpClient, HttpRequest};
use crate::error::Result;

/// Fetches from a single node the caller controls.
///
/// There is only one source, so there is nothing to hedge; the same timeout and
/// byte ceiling as a gateway attempt still apply.
pub struct NodeFetcher<C> {
    client:             Arc<C>,
    endpoint:           String,
    timeout:            Duration,
    max_response_bytes: u64,
}

impl<C: HttpClient> NodeFetcher<C> {
    pub fn new(
        client: Arc<C>,
        endpoint: impl Into<String>,
        timeout: Duration,
        max_response_bytes: u64,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
            max_response_bytes,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch(&self, cid: &ContentId) -> Result<Bytes> {
        let request = HttpRequest::post(node_cat_url(&self.endpoint, cid));
        debug!(url = %request.url, "fetching from node");

        fetch_once(
            &*self.client,
            &request,
            self.max_response_bytes,
            self.timeout,
            &CancellationToken::new(),
        )
        .await
    }
}
