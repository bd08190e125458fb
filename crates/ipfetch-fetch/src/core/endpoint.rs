use ipfetch_cid::ContentId;
use url::form_urlencoded;

/// Percent-encode an identifier for use in a path or query.
///
/// Validated identifiers are alphanumeric, so this is the identity for them;
/// it still runs so nothing unvalidated can reach a URL unencoded.
pub fn encode_cid(cid: &ContentId) -> String {
    form_urlencoded::byte_serialize(cid.as_str().as_bytes()).collect()
}

/// `<gateway-base><encoded-identifier>`.
pub fn gateway_url(base: &str, cid: &ContentId) -> String {
    format!("{base}{}", encode_cid(cid))
}

/// Content-fetch endpoint of a self-hosted node's RPC API.
///
/// ```
/// use ipfetch_cid::ContentId;
/// use ipfetch_fetch::core::node_cat_url;
///
/// let cid = ContentId::parse("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG").unwrap();
/// assert_eq!(
///     node_cat_url("http://127.0.0.1:5001/", &cid),
///     "http://127.0.0.1:5001/api/v0/cat?arg=QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"
/// );
/// ```
pub fn node_cat_url(base: &str, cid: &ContentId) -> String {
    format!("{}/api/v0/cat?arg={}", base.trim_end_matches('/'), encode_cid(cid))
}
