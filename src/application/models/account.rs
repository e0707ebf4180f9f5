/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

/// Registration form. The phone number is the login identifier.
#[derive(Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub password: String,
    pub password2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

impl SignupRequest {
    /// Client-side checks run before anything is sent.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("name", &self.name),
            ("phone_number", &self.phone_number),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        if self.password != self.password2 {
            return Err(AppError::Validation("passwords do not match".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .field("email", &self.email)
            .field("gender", &self.gender)
            .field("date_of_birth", &self.date_of_birth)
            .field("password", &"[REDACTED]")
            .field("password2", &"[REDACTED]")
            .field("referral_code", &self.referral_code)
            .finish()
    }
}

/// Editable profile fields. The phone number is deliberately absent: it is
/// the account identifier.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Headquarters {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public company information shown on the about page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub headquarters_address: Option<Headquarters>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub feature_flags: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CompanyInfo {
    /// Flags the server reports as switched on, in key order.
    pub fn enabled_features(&self) -> Vec<&str> {
        self.feature_flags
            .iter()
            .filter(|(_, value)| value.as_bool() == Some(true))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
