use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Home,
    Office,
    Other,
}

/// A saved shipping address. `id` is absent until the server has stored it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub address_type: AddressType,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("address_line_1", &self.address_line_1),
            ("city", &self.city),
            ("state", &self.state),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        if self.pincode.len() != 6 || !self.pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::Validation(
                "pincode must be exactly 6 digits".to_string(),
            ));
        }
        Ok(())
    }

    /// The address checkout preselects: the default one, else the first.
    pub fn preferred(addresses: &[Address]) -> Option<&Address> {
        addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| addresses.first())
    }
}
