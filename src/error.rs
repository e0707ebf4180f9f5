/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 18/10/26
 ******************************************************************************/
use reqwest::StatusCode;
use std::fmt::{Display, Formatter};
use std::{fmt, io};

/// Failure value of every remote call and storage access.
///
/// The dispatcher never classifies failures beyond wrapping whatever the
/// transport supplied; callers use [`AppError::status`] and
/// [`AppError::detail`] when they need to tell an expired session from a
/// validation error.
#[derive(Debug)]
pub enum AppError {
    Network(reqwest::Error),
    Io(io::Error),
    Json(serde_json::Error),
    Http { status: StatusCode, body: String },
    Storage(String),
    Validation(String),
}

impl AppError {
    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// The server's human-readable `detail` field, when the error body is a
    /// JSON object carrying one.
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::Http { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()?
                .get("detail")?
                .as_str()
                .map(String::from),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Http { status, body } => {
                write!(f, "unexpected http status: {status}, body: {body}")
            }
            AppError::Storage(s) => write!(f, "storage error: {s}"),
            AppError::Validation(s) => write!(f, "validation error: {s}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}
impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}
impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
