//! Reduces caller input to a bare identifier.

/// Scheme prefix accepted in front of an identifier.
pub const IPFS_SCHEME: &str = "ipfs://";

/// Result of stripping the scheme and trailing path from caller input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizedInput<'a> {
    /// Bare identifier candidate. Not yet validated.
    pub cid: &'a str,
    /// Path that followed the identifier, if any. Retrieval ignores it.
    pub path: Option<&'a str>,
}

/// Strip an `ipfs://` prefix and split off anything after the first `/`.
///
/// Never fails; shape checks happen in [`ContentId::parse`](crate::ContentId::parse).
pub fn normalize(input: &str) -> NormalizedInput<'_> {
    let rest = input.strip_prefix(IPFS_SCHEME).unwrap_or(input);

    match rest.split_once('/') {
        Some((cid, path)) => NormalizedInput {
            cid,
            path: (!path.is_empty()).then_some(path),
        },
        None => NormalizedInput { cid: rest, path: None },
    }
}
