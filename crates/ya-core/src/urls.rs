//! Paths of the `users:*` pages.
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters kept verbatim in the `next` parameter.
const NEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `users:login`
#[must_use]
pub fn login() -> String {
    "/auth/login/".to_owned()
}

/// `users:logout`
#[must_use]
pub fn logout() -> String {
    "/auth/logout/".to_owned()
}

/// `users:signup`
#[must_use]
pub fn signup() -> String {
    "/auth/signup/".to_owned()
}

/// `users:login?next=<path>`, the target of every login-required redirect.
#[must_use]
pub fn login_with_next(next: &str) -> String {
    format!("{}?next={}", login(), utf8_percent_encode(next, NEXT))
}

/// Whether `next` points back into this site.
///
/// Only absolute local paths are followed after login, anything else falls
/// back to the home page.
#[must_use]
pub fn is_local(next: &str) -> bool {
    next.starts_with('/') && !next.starts_with("//") && !next.contains('\\')
}
