use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::effects::http::HttpResponse;
use crate::error::{Error, Result};

/// Read a whole response body, refusing to hold more than `limit` bytes.
///
/// - An advertised `Content-Length` above `limit` fails before any chunk is polled.
/// - Otherwise chunks are counted as they arrive; the chunk that pushes the total
///   past `limit` fails the read and is dropped without being kept.
/// - `cancel` is checked before every chunk.
///
/// Returns the complete body or an error, never a prefix.
pub async fn read_bounded<E: std::error::Error>(
    url: &str,
    response: HttpResponse<E>,
    limit: u64,
    cancel: &CancellationToken,
) -> Result<Bytes> {
    if let Some(advertised) = response.content_length.filter(|&n| n > limit) {
        debug!(url, advertised, limit, "advertised length over limit, body not read");
        return Err(Error::SizeLimitExceeded {
            url: url.to_string(),
            limit,
            observed: advertised,
            advertised: true,
        });
    }

    let mut body = response.body;
    let mut chunks: Vec<Bytes> = Vec::new();
    let mut total: u64 = 0;

    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(Error::Cancelled { url: url.to_string() });
            }
            next = body.next() => next,
        };

        let Some(chunk) = next else { break };
        let chunk = chunk.map_err(|e| Error::transport(url, e))?;

        total = total.saturating_add(chunk.len() as u64);
        if total > limit {
            debug!(url, total, limit, "body over limit, aborting read");
            return Err(Error::SizeLimitExceeded {
                url: url.to_string(),
                limit,
                observed: total,
                advertised: false,
            });
        }
        chunks.push(chunk);
    }

    Ok(concat(chunks, total))
}

fn concat(mut chunks: Vec<Bytes>, total: u64) -> Bytes {
    if chunks.len() == 1 {
        return chunks.pop().unwrap_or_default();
    }

    let mut buf = BytesMut::with_capacity(usize::try_from(total).unwrap_or_default());
    for chunk in chunks {
        buf.extend_from_slice(&chunk);
    }
    buf.freeze()
}
