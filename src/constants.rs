/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Storage key of the short-lived bearer credential.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key of the long-lived credential. Persisted, never sent automatically.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

pub(crate) const BEARER_PREFIX: &str = "Bearer";

pub(crate) const LOGIN_ENDPOINT: &str = "/accounts/login/";
pub(crate) const PROFILE_ENDPOINT: &str = "/accounts/profile/";
pub(crate) const SIGNUP_ENDPOINT: &str = "/accounts/signup/";
pub(crate) const ABOUT_ENDPOINT: &str = "/accounts/about/";
pub(crate) const NOTIFICATIONS_ENDPOINT: &str = "/accounts/notifications/";

pub(crate) const PRODUCTS_ENDPOINT: &str = "/catalog/products/";
pub(crate) const CART_ENDPOINT: &str = "/catalog/cart/";
pub(crate) const CART_ADD_ENDPOINT: &str = "/catalog/cart/add/";
pub(crate) const CART_UPDATE_ITEM_ENDPOINT: &str = "/catalog/cart/update-item/";
pub(crate) const CART_CLEAR_ENDPOINT: &str = "/catalog/cart/clear/";
pub(crate) const ADDRESSES_ENDPOINT: &str = "/catalog/addresses/";
pub(crate) const ORDERS_ENDPOINT: &str = "/catalog/orders/";
pub(crate) const ORDER_CREATE_ENDPOINT: &str = "/catalog/orders/create/";

/// Shown when the login endpoint rejects credentials without a `detail` field.
pub const DEFAULT_LOGIN_FAILURE: &str = "Login failed. Check phone or password.";

pub(crate) const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub(crate) const DEFAULT_REST_TIMEOUT: u64 = 30;
pub(crate) const DEFAULT_TOKEN_PATH: &str = ".storefront/tokens.json";
