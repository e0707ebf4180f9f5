/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 18/10/26
 ******************************************************************************/
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Approval state of a user's request to sell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SellerStatus {
    /// Never applied, or the server sent no recognisable value.
    #[default]
    None,
    Pending,
    Approved,
    Rejected,
}

impl SellerStatus {
    fn from_wire(value: &Value) -> Self {
        match value.as_str().map(|s| s.trim().to_lowercase()).as_deref() {
            Some("pending") => SellerStatus::Pending,
            Some("approved") => SellerStatus::Approved,
            Some("rejected") => SellerStatus::Rejected,
            _ => SellerStatus::None,
        }
    }
}

impl<'de> Deserialize<'de> for SellerStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(SellerStatus::from_wire(&raw))
    }
}

/// `None` goes back on the wire as `null`, the way the server reports a user
/// who never applied.
impl Serialize for SellerStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SellerStatus::None => serializer.serialize_none(),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

impl fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SellerStatus::None => write!(f, "none"),
            SellerStatus::Pending => write!(f, "pending"),
            SellerStatus::Approved => write!(f, "approved"),
            SellerStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// The authenticated principal as returned by the profile endpoint.
///
/// Only the identity and seller status are interpreted; every other field
/// is carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    #[serde(default)]
    pub seller_status: SellerStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn is_approved_seller(&self) -> bool {
        self.seller_status == SellerStatus::Approved
    }

    /// An uninterpreted profile field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }
}
