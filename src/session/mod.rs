pub mod auth;
pub mod guard;
pub mod interface;
pub mod session;
pub mod user;
