//! Pure transformations for retrieval.
//!
//! URL construction and status classification. Nothing in here performs I/O.

mod endpoint;
mod validation;

pub use endpoint::{encode_cid, gateway_url, node_cat_url};
pub use validation::{is_redirect, is_success};
