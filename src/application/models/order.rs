/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use super::address::Address;
use super::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItem {
    pub id: u64,
    /// Product title as it was when the order was placed.
    #[serde(default)]
    pub title_snapshot: Option<String>,
    #[serde(default)]
    pub qty: u32,
    #[serde(default)]
    pub price_snapshot: Option<Money>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: u64,
    pub status: String,
    #[serde(default)]
    pub total: Option<Money>,
    #[serde(default)]
    pub subtotal: Option<Money>,
    #[serde(default)]
    pub gst_amount: Option<Money>,
    #[serde(default)]
    pub discount_amount: Option<Money>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Checkout payload. The cart itself is implicit: the server orders
/// whatever is in the caller's cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    pub address_id: u64,
    pub voucher_code: Option<String>,
}

impl CreateOrderRequest {
    /// Blank voucher codes are sent as `null`.
    pub fn new(address_id: u64, voucher_code: Option<&str>) -> Self {
        let voucher_code = voucher_code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(String::from);
        Self {
            address_id,
            voucher_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedOrder {
    pub id: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
