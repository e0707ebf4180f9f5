use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential exchange body for the login endpoint.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub(crate) phone_number: &'a str,
    pub(crate) password: &'a str,
}

/// Access/refresh pair returned by a successful login.
///
/// Both halves are written together and cleared together.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Result of [`SessionStore::login`](crate::session::session::SessionStore::login).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted and tokens persisted. The profile may still be
    /// missing if recovery failed right after; callers should retry later.
    Success,
    /// Credentials rejected or unreachable server. `detail` is meant for
    /// display.
    Failed { detail: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            LoginOutcome::Success => None,
            LoginOutcome::Failed { detail } => Some(detail),
        }
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"access\":\"[REDACTED]\",\"refresh\":\"[REDACTED]\"}}")
    }
}

impl fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"phone_number\":\"{}\",\"password\":\"[REDACTED]\"}}",
            self.phone_number
        )
    }
}
