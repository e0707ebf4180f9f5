pub mod account_service;
pub mod address_service;
pub mod catalog_service;
pub mod order_service;
