use super::Money;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_with_gst: Option<Money>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    pub id: u64,
    #[serde(default)]
    pub product_title: Option<String>,
    pub qty: u32,
    #[serde(default)]
    pub price_snapshot: Option<Money>,
    #[serde(default)]
    pub gst_amount: Option<Money>,
    #[serde(default)]
    pub total_with_gst: Option<Money>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The caller's cart with server-computed totals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: Option<Money>,
    #[serde(default)]
    pub total_gst: Option<Money>,
    #[serde(default)]
    pub grand_total: Option<Money>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cart {
    /// Number of units across all lines, as shown on the cart badge.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.qty))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AddToCartRequest {
    pub(crate) product: u64,
    pub(crate) qty: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct UpdateCartItemRequest {
    pub(crate) item_id: u64,
    pub(crate) qty: u32,
}

#[cfg(test)]
mod tests_catalog_models {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_cart_counts_units() {
        let cart: Cart = serde_json::from_value(json!({
            "id": 4,
            "items": [
                {"id": 1, "product_title": "Mug", "qty": 2, "price_snapshot": "199.00",
                 "gst_amount": "35.82", "total_with_gst": "469.64"},
                {"id": 2, "product_title": "Tee", "qty": 3}
            ],
            "total": "797.00",
            "total_gst": "143.46",
            "grand_total": "940.46"
        }))
        .unwrap();

        assert_eq!(cart.item_count(), 5);
        assert!(!cart.is_empty());
        assert_eq!(cart.grand_total, Some(Money("940.46".to_string())));
        assert_eq!(cart.extra["id"], 4);
    }

    #[test]
    fn test_item_count_saturates() {
        let cart: Cart = serde_json::from_value(json!({
            "items": [
                {"id": 1, "qty": u32::MAX},
                {"id": 2, "qty": 5}
            ]
        }))
        .unwrap();
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_empty_cart() {
        let cart: Cart = serde_json::from_value(json!({})).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_product() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "slug": "blue-mug",
            "title": "Blue Mug",
            "price_with_gst": 234.82,
            "images": [{"image": "/media/mug.png"}]
        }))
        .unwrap();

        assert_eq!(product.slug, "blue-mug");
        assert_eq!(product.price_with_gst.unwrap().to_string(), "234.82");
        assert!(product.extra.contains_key("images"));
    }
}
