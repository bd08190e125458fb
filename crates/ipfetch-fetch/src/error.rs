//! Error types for ipfetch-fetch.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid content identifier: {0}")]
    InvalidCid(#[from] ipfetch_cid::Error),

    #[error("transport error from {url}: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("{url} answered with redirect (HTTP {status}) to {location:?}; redirects are not followed")]
    Redirect {
        url:      String,
        status:   u16,
        location: Option<String>,
    },

    #[error("{url} did not complete within {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} was cancelled")]
    Cancelled { url: String },

    #[error("response from {url} exceeds the {limit}-byte limit ({} {observed} bytes)", size_detail(.advertised))]
    SizeLimitExceeded {
        url:        String,
        limit:      u64,
        observed:   u64,
        advertised: bool,
    },

    #[error("all {attempts} gateway attempts failed; last error: {last}")]
    AllGatewaysFailed {
        attempts: usize,
        #[source]
        last:     Box<Error>,
    },

    #[error("integrity check failed: {0}")]
    Integrity(#[from] ipfetch_verify::VerificationError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

fn size_detail(advertised: &bool) -> &'static str {
    if *advertised { "advertised" } else { "received at least" }
}

/// Coarse classification of [`Error`] for callers that branch on failure type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed identifier; nothing was sent.
    InputValidation,
    /// One source failed at the network or HTTP level.
    Transport,
    /// One source sent more than the byte ceiling.
    ResourceLimit,
    /// Every gateway failed. See [`Error::root_cause`].
    Exhausted,
    /// Downloaded bytes do not match the identifier.
    Integrity,
    Config,
}

impl Error {
    pub(crate) fn transport(url: &str, err: impl std::error::Error) -> Self {
        Error::Transport {
            url:     url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCid(_) => ErrorKind::InputValidation,
            Error::Transport { .. }
            | Error::HttpStatus { .. }
            | Error::Redirect { .. }
            | Error::Timeout { .. }
            | Error::Cancelled { .. } => ErrorKind::Transport,
            Error::SizeLimitExceeded { .. } => ErrorKind::ResourceLimit,
            Error::AllGatewaysFailed { .. } => ErrorKind::Exhausted,
            Error::Integrity(_) => ErrorKind::Integrity,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// The innermost error, looking through [`Error::AllGatewaysFailed`].
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::AllGatewaysFailed { last, .. } => last.root_cause(),
            other => other,
        }
    }

    /// Whether asking again could succeed.
    ///
    /// Integrity failures are deterministic for the same identifier and bytes.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Transport | ErrorKind::ResourceLimit | ErrorKind::Exhausted
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
