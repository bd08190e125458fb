//! Hedged, size-bounded, integrity-checked retrieval over HTTP gateways.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and types
//! - [`core`] - Pure transformations
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Hedged**: Gateways are started in priority order with a staggered delay; the
//!   first complete response wins and every other attempt is cancelled
//! - **Bounded**: Response bodies are capped regardless of what `Content-Length` claims
//! - **No Redirects**: A 3xx from a gateway is an attempt failure
//! - **Fail Closed**: Bytes are returned only after their digest matches the identifier
//!
//! # Example
//!
//! ```no_run
//! use ipfetch_fetch::{RetrievalConfig, Retriever};
//!
//! # async fn run() -> ipfetch_fetch::Result<()> {
//! let retriever = Retriever::with_reqwest(RetrievalConfig::default())?;
//! let text = retriever
//!     .retrieve("ipfs://QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4")
//!     .await?;
//! assert_eq!(text, "hello world");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use data::{
    DEFAULT_GATEWAY_TIMEOUT, DEFAULT_GATEWAYS, DEFAULT_HEDGE_DELAY, DEFAULT_MAX_CONCURRENT,
    DEFAULT_MAX_RESPONSE_BYTES, GatewayEndpoint, HedgePolicy, ProviderMode, RetrievalConfig,
};
pub use effects::{
    BoxStream, HedgedFetcher, HttpClient, HttpRequest, HttpResponse, Method, NodeFetcher,
    RetrievalSession, RetrievalStrategy, Retriever, read_bounded,
};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{Error, ErrorKind, Result};
