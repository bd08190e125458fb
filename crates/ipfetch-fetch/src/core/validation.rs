/// Returns `true` for any 3xx status.
///
/// Gateways answering with a redirect fail the attempt; the `Location` is
/// never followed. Codes without a `Location` (300, 304) count too, since a
/// gateway has no business sending them for a plain GET.
///
/// # Examples
///
/// ```
/// use ipfetch_fetch::core::is_redirect;
///
/// assert!(is_redirect(301));
/// assert!(is_redirect(304));
/// assert!(!is_redirect(200));
/// assert!(!is_redirect(404));
/// ```
pub fn is_redirect(status: u16) -> bool {
    (300..400).contains(&status)
}

/// Returns `true` for 2xx statuses.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
