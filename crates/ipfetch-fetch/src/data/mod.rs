//! Immutable configuration types for retrieval.
//!
//! Everything here is read-only once a [`Retriever`](crate::Retriever) is
//! built and is shared by every attempt of every call.

pub mod config;
pub mod gateway;

pub use config::{
    DEFAULT_GATEWAY_TIMEOUT, DEFAULT_HEDGE_DELAY, DEFAULT_MAX_CONCURRENT,
    DEFAULT_MAX_RESPONSE_BYTES, HedgePolicy, ProviderMode, RetrievalConfig,
};
pub use gateway::{DEFAULT_GATEWAYS, GatewayEndpoint};
