//! I/O operations for retrieval.
//!
//! Everything that touches the network lives here, behind the [`HttpClient`]
//! trait so tests can substitute scripted clients.

mod attempt;
mod bounded;
mod hedged;
mod http;
mod node;
mod retriever;
mod session;
mod strategy;

pub use bounded::read_bounded;
pub use hedged::HedgedFetcher;
pub use http::{BoxStream, HttpClient, HttpRequest, HttpResponse, Method};
pub use node::NodeFetcher;
pub use retriever::Retriever;
pub use session::RetrievalSession;
pub use strategy::RetrievalStrategy;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
