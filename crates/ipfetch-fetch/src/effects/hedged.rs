//! Staggered racing of gateway requests.

use std::collections::VecDeque;
use std::sync::Arc;

use bytes::Bytes;
use futures_util::stream::{FuturesUnordered, StreamExt};
use ipfetch_cid::ContentId;
use tracing::{debug, info, warn};

use crate::data::{GatewayEndpoint, HedgePolicy};
use crate::effects::attempt::fetch_once;
use crate::effects::http::{HttpClient, HttpRequest};
use crate::effects::session::RetrievalSession;
use crate::error::{Error, Result};

/// Races gateways with staggered starts and a cap on concurrent attempts.
///
/// Gateways are started in list order. After each start the fetcher waits up to
/// [`HedgePolicy::hedge_delay`] before starting the next one, unless a winner
/// appears first. A fast failure does not skip the wait. When
/// [`HedgePolicy::max_concurrent`] attempts are running, the next start waits
/// for the oldest running attempt to settle. The first complete, bounded body
/// wins; every other attempt is cancelled.
///
/// All attempts are polled from the calling task, so only one of them runs
/// between suspension points.
pub struct HedgedFetcher<C> {
    client:   Arc<C>,
    gateways: Vec<GatewayEndpoint>,
    policy:   HedgePolicy,
}

impl<C: HttpClient> HedgedFetcher<C> {
    pub fn new(client: Arc<C>, gateways: Vec<GatewayEndpoint>, policy: HedgePolicy) -> Self {
        Self {
            client,
            gateways,
            policy,
        }
    }

    pub fn gateways(&self) -> &[GatewayEndpoint] {
        &self.gateways
    }

    pub fn policy(&self) -> &HedgePolicy {
        &self.policy
    }

    /// Fetch `cid` from the configured gateways.
    pub async fn fetch(&self, cid: &ContentId) -> Result<Bytes> {
        let urls = self.gateways.iter().map(|g| g.url_for(cid)).collect();
        self.race(urls).await
    }

    /// Race already-bound gateway URLs, highest priority first.
    pub async fn race(&self, urls: Vec<String>) -> Result<Bytes> {
        if urls.is_empty() {
            return Err(Error::Config("no gateways configured".into()));
        }

        let policy = self.policy;
        let max_concurrent = policy.max_concurrent.max(1);
        let client = &*self.client;

        let mut session = RetrievalSession::new();
        let cancel = session.cancel_token().clone();
        let mut in_flight = FuturesUnordered::new();
        // Unsettled attempts in launch order; the front is the oldest.
        let mut active: VecDeque<usize> = VecDeque::with_capacity(max_concurrent);

        for (index, url) in urls.iter().enumerate() {
            if active.len() >= max_concurrent {
                let oldest = active[0];
                debug!(oldest, "concurrency ceiling reached, waiting for oldest attempt");
                while active.contains(&oldest) && !session.has_winner() {
                    let Some((i, result)) = in_flight.next().await else { break };
                    settle(&mut session, &mut active, &urls, i, result);
                }
            }
            if session.has_winner() {
                break;
            }

            debug!(gateway = %url, index, active = active.len() + 1, "starting attempt");
            let request = HttpRequest::get(url.as_str());
            let cancel = cancel.clone();
            in_flight.push(async move {
                let result = fetch_once(
                    client,
                    &request,
                    policy.max_response_bytes,
                    policy.gateway_timeout,
                    &cancel,
                )
                .await;
                (index, result)
            });
            active.push_back(index);

            if index + 1 < urls.len() {
                let hedge = tokio::time::sleep(policy.hedge_delay);
                tokio::pin!(hedge);
                // Only a winner cuts the stagger short; failures are settled while waiting.
                while !session.has_winner() {
                    tokio::select! {
                        _ = &mut hedge => break,
                        Some((i, result)) = in_flight.next(), if !in_flight.is_empty() => {
                            settle(&mut session, &mut active, &urls, i, result);
                        }
                    }
                }
            }
        }

        // Losers see the raised token and resolve immediately.
        while let Some((i, result)) = in_flight.next().await {
            settle(&mut session, &mut active, &urls, i, result);
        }

        session.finish()
    }
}

fn settle(
    session: &mut RetrievalSession,
    active: &mut VecDeque<usize>,
    urls: &[String],
    index: usize,
    result: Result<Bytes>,
) {
    active.retain(|&i| i != index);
    let gateway = urls[index].as_str();

    match result {
        Ok(bytes) => {
            let len = bytes.len();
            if session.claim(index, bytes) {
                info!(gateway, index, len, "gateway won");
            }
        }
        Err(err) if session.has_winner() => {
            debug!(gateway, index, error = %err, "attempt stopped after winner");
        }
        Err(err) => {
            warn!(gateway, index, error = %err, "gateway attempt failed");
            session.record_failure(err);
        }
    }
}
