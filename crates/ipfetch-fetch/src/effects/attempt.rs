use std::time::Duration;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::{is_redirect, is_success};
use crate::effects::bounded::read_bounded;
use crate::effects::http::{HttpClient, HttpRequest, HttpResponse};
use crate::error::{Error, Result};

/// One request against one source: send, check status, read the bounded body.
///
/// The whole attempt, body included, is limited by `timeout`. Raising `cancel`
/// ends it at its next suspension point.
pub(crate) async fn fetch_once<C: HttpClient>(
    client: &C,
    request: &HttpRequest,
    limit: u64,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<Bytes> {
    let url = request.url.as_str();

    let work = async {
        let response = client
            .send(request)
            .await
            .map_err(|e| Error::transport(url, e))?;
        check_status(url, &response)?;
        read_bounded(url, response, limit, cancel).await
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(url, "attempt cancelled");
            Err(Error::Cancelled { url: url.to_string() })
        }
        result = tokio::time::timeout(timeout, work) => {
            result.unwrap_or_else(|_| {
                debug!(url, ?timeout, "attempt timed out");
                Err(Error::Timeout { url: url.to_string(), timeout })
            })
        }
    }
}

fn check_status<E>(url: &str, response: &HttpResponse<E>) -> Result<()> {
    if is_redirect(response.status) {
        return Err(Error::Redirect {
            url:      url.to_string(),
            status:   response.status,
            location: response.location.clone(),
        });
    }
    if !is_success(response.status) {
        return Err(Error::HttpStatus {
            url:    url.to_string(),
            status: response.status,
        });
    }
    Ok(())
}
