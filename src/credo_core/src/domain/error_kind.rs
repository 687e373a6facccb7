use std::fmt;

/// Coarse classification shared by every service error, used by transports to
/// pick a status without inspecting individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input. The caller's fault, never retried.
    Validation,
    /// Account or code lookup miss. Also used for wrong-credential cases that
    /// must not be distinguishable from a missing account.
    NotFound,
    /// Duplicate registration or a request that is already pending.
    Conflict,
    /// Stale one-time code.
    Expired,
    /// Bad credentials, invalid token, revoked refresh session, inactive account.
    Auth,
    /// Any infrastructure failure behind a port.
    StoreUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Expired => "expired",
            ErrorKind::Auth => "auth",
            ErrorKind::StoreUnavailable => "store_unavailable",
        };
        f.write_str(kind)
    }
}
