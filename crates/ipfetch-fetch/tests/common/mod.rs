//! Scripted HTTP client shared by the integration tests.
//!
//! Each URL is bound to a [`Behavior`]. The client records which requests were
//! started, when, how many attempts were open at once, how many body chunks were
//! handed out, and how many attempts were dropped before they finished.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use ipfetch_fetch::{HttpClient, HttpRequest, HttpResponse};
use tokio::time::Instant;

#[derive(Debug)]
pub struct MockError(pub String);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MockError {}

#[derive(Clone, Debug)]
pub enum Behavior {
    /// 200 with `body` split into `chunk_size` pieces.
    Serve {
        body:           Vec<u8>,
        delay:          Duration,
        chunk_size:     usize,
        chunk_delay:    Duration,
        content_length: Option<u64>,
    },
    /// Connection-level failure after `delay`.
    Fail { message: String, delay: Duration },
    /// Non-success status with an empty body.
    Status(u16),
    /// 302 pointing at `location`.
    Redirect(String),
    /// Never answers.
    Hang,
}

impl Behavior {
    pub fn serve(body: impl AsRef<[u8]>) -> Self {
        let body = body.as_ref().to_vec();
        Behavior::Serve {
            content_length: Some(body.len() as u64),
            chunk_size: body.len().max(1),
            body,
            delay: Duration::ZERO,
            chunk_delay: Duration::ZERO,
        }
    }

    pub fn fail(message: &str) -> Self {
        Behavior::Fail {
            message: message.to_string(),
            delay:   Duration::ZERO,
        }
    }

    #[must_use]
    pub fn after(self, wait: Duration) -> Self {
        match self {
            Behavior::Serve {
                body,
                chunk_size,
                chunk_delay,
                content_length,
                ..
            } => Behavior::Serve {
                body,
                delay: wait,
                chunk_size,
                chunk_delay,
                content_length,
            },
            Behavior::Fail { message, .. } => Behavior::Fail {
                message,
                delay: wait,
            },
            other => other,
        }
    }

    #[must_use]
    pub fn chunked(self, size: usize, every: Duration) -> Self {
        match self {
            Behavior::Serve {
                body,
                delay,
                content_length,
                ..
            } => Behavior::Serve {
                body,
                delay,
                chunk_size: size.max(1),
                chunk_delay: every,
                content_length,
            },
            other => other,
        }
    }

    #[must_use]
    pub fn content_length(self, length: Option<u64>) -> Self {
        match self {
            Behavior::Serve {
                body,
                delay,
                chunk_size,
                chunk_delay,
                ..
            } => Behavior::Serve {
                body,
                delay,
                chunk_size,
                chunk_delay,
                content_length: length,
            },
            other => other,
        }
    }
}

#[derive(Debug, Default)]
pub struct Stats {
    active:     AtomicUsize,
    max_active: AtomicUsize,
    cancelled:  AtomicUsize,
    requests:   Mutex<Vec<(HttpRequest, Instant)>>,
    chunks:     Mutex<HashMap<String, usize>>,
}

impl Stats {
    pub fn max_active(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Attempts dropped before they produced a final result.
    pub fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(r, _)| r.clone())
            .collect()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    pub fn started_at(&self, url: &str) -> Option<Instant> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|(r, _)| r.url == url)
            .map(|(_, at)| *at)
    }

    pub fn chunks_delivered(&self, url: &str) -> usize {
        self.chunks.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

/// Tracks one open attempt. Counts as cancelled if dropped unfinished.
struct AttemptGuard {
    stats:    Arc<Stats>,
    finished: bool,
}

impl AttemptGuard {
    fn open(stats: &Arc<Stats>) -> Self {
        let now = stats.active.fetch_add(1, Ordering::SeqCst) + 1;
        stats.max_active.fetch_max(now, Ordering::SeqCst);
        Self {
            stats:    stats.clone(),
            finished: false,
        }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for AttemptGuard {
    fn drop(&mut self) {
        self.stats.active.fetch_sub(1, Ordering::SeqCst);
        if !self.finished {
            self.stats.cancelled.fetch_add(1, Ordering::SeqCst);
        }
    }
}

struct BodyState {
    url:         String,
    guard:       Option<AttemptGuard>,
    chunks:      VecDeque<Bytes>,
    chunk_delay: Duration,
    stats:       Arc<Stats>,
}

#[derive(Default)]
pub struct ScriptedClient {
    routes: HashMap<String, Behavior>,
    stats:  Arc<Stats>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn route(mut self, url: impl Into<String>, behavior: Behavior) -> Self {
        self.routes.insert(url.into(), behavior);
        self
    }

    pub fn stats(&self) -> Arc<Stats> {
        self.stats.clone()
    }
}

impl HttpClient for ScriptedClient {
    type Error = MockError;

    async fn send(
        &self,
        request: &HttpRequest,
    ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
        self.stats
            .requests
            .lock()
            .unwrap()
            .push((request.clone(), Instant::now()));
        let guard = AttemptGuard::open(&self.stats);

        let Some(behavior) = self.routes.get(&request.url).cloned() else {
            guard.finish();
            return Err(MockError(format!("no route for {}", request.url)));
        };

        match behavior {
            Behavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            Behavior::Fail { message, delay } => {
                tokio::time::sleep(delay).await;
                guard.finish();
                Err(MockError(message))
            }
            Behavior::Status(status) => {
                guard.finish();
                Ok(empty_response(status, None))
            }
            Behavior::Redirect(location) => {
                guard.finish();
                Ok(empty_response(302, Some(location)))
            }
            Behavior::Serve {
                body,
                delay,
                chunk_size,
                chunk_delay,
                content_length,
            } => {
                tokio::time::sleep(delay).await;

                let chunks = body
                    .chunks(chunk_size)
                    .map(Bytes::copy_from_slice)
                    .collect::<VecDeque<_>>();
                let state = BodyState {
                    url: request.url.clone(),
                    guard: Some(guard),
                    chunks,
                    chunk_delay,
                    stats: self.stats.clone(),
                };

                let stream = futures_util::stream::unfold(state, |mut st| async move {
                    if !st.chunk_delay.is_zero() {
                        tokio::time::sleep(st.chunk_delay).await;
                    }
                    match st.chunks.pop_front() {
                        Some(chunk) => {
                            {
                                let mut chunks = st.stats.chunks.lock().unwrap();
                                *chunks.entry(st.url.clone()).or_default() += 1;
                            }
                            Some((Ok::<_, MockError>(chunk), st))
                        }
                        None => {
                            if let Some(guard) = st.guard.take() {
                                guard.finish();
                            }
                            None
                        }
                    }
                });

                Ok(HttpResponse {
                    status: 200,
                    content_length,
                    location: None,
                    body: Box::pin(stream),
                })
            }
        }
    }
}

fn empty_response(status: u16, location: Option<String>) -> HttpResponse<MockError> {
    HttpResponse {
        status,
        content_length: Some(0),
        location,
        body: Box::pin(futures_util::stream::empty()),
    }
}
