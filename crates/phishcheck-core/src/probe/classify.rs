//! Map curl errors and HTTP status codes onto probe outcomes.

use super::{Reachability, UnreachableReason};

/// Statuses below 400 (including redirects left unfollowed) count as reachable.
pub fn classify_status(code: u32) -> Reachability {
    if code < 400 {
        Reachability::Reachable { status: code }
    } else {
        Reachability::Unreachable(UnreachableReason::Http(code))
    }
}

/// Classify a curl error into an unreachable reason.
pub fn classify_curl_error(e: &curl::Error) -> UnreachableReason {
    if e.is_operation_timedout() {
        return UnreachableReason::Timeout;
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return UnreachableReason::Resolve;
    }
    if e.is_couldnt_connect() || e.is_ssl_connect_error() {
        return UnreachableReason::Connect;
    }
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return UnreachableReason::InvalidUrl(e.description().to_string());
    }
    UnreachableReason::Transport(e.to_string())
}
