pub mod account;
pub mod address;
pub mod catalog;
pub mod order;

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A monetary amount exactly as the server formatted it.
///
/// Totals and GST are computed server-side; the client only displays them,
/// so no arithmetic is offered here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Money(pub String);

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Money(s),
            Raw::Number(n) => Money(n.to_string()),
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// List endpoints answer either with a bare array or with a paginated
/// `{"results": [...]}` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Plain(Vec<T>),
    Page { results: Vec<T> },
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Plain(items) => items,
            ListResponse::Page { results } => results,
        }
    }
}
