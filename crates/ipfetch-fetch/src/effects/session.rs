use bytes::Bytes;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// State scoped to a single retrieval call.
///
/// Holds the write-once winner slot, the most recent failure and the
/// cancellation signal shared by every attempt of the call.
#[derive(Debug, Default)]
pub struct RetrievalSession {
    winner:     Option<(usize, Bytes)>,
    last_error: Option<Error>,
    failures:   usize,
    cancel:     CancellationToken,
}

impl RetrievalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Index of the attempt that won, if any.
    pub fn winner_index(&self) -> Option<usize> {
        self.winner.as_ref().map(|(index, _)| *index)
    }

    /// Record a successful attempt and cancel everything else.
    ///
    /// Returns `false`, leaving the slot untouched, if a winner already exists.
    pub fn claim(&mut self, index: usize, bytes: Bytes) -> bool {
        if self.winner.is_some() {
            return false;
        }
        self.winner = Some((index, bytes));
        self.cancel.cancel();
        true
    }

    /// Record a failed attempt. Ignored once a winner exists.
    pub fn record_failure(&mut self, error: Error) {
        if self.winner.is_some() {
            return;
        }
        self.failures += 1;
        self.last_error = Some(error);
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// The winning bytes, or every attempt's failure summarised by the last one.
    pub fn finish(self) -> Result<Bytes> {
        if let Some((_, bytes)) = self.winner {
            return Ok(bytes);
        }

        let last = self
            .last_error
            .unwrap_or_else(|| Error::Config("no gateway attempt was started".into()));
        Err(Error::AllGatewaysFailed {
            attempts: self.failures,
            last:     Box::new(last),
        })
    }
}
