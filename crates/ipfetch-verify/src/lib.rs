//! Content integrity verification for retrieved bytes.
//!
//! Recomputes the digest of downloaded content and compares it against the
//! digest embedded in its identifier. Verification fails closed: identifiers
//! whose digest cannot be checked are rejected.
//!
//! # Example
//!
//! ```
//! use ipfetch_verify::{content_id_v0, verify_content};
//!
//! let cid = content_id_v0(b"hello world");
//! assert_eq!(cid.as_str(), "QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4");
//!
//! verify_content(&cid, b"hello world").unwrap();
//! assert!(verify_content(&cid, b"hello there").is_err());
//! ```

pub use self::error::{Result, VerificationError};
pub use self::hasher::{Hasher, Sha256Hasher};
pub use self::integrity::{content_id_v0, verify_content, verify_digest};
pub use self::reader::HashingReader;

mod error;
mod hasher;
mod integrity;
mod reader;
