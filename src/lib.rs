/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client-side session and request core for a REST storefront.
//!
//! [`session::session::SessionStore`] owns who is logged in,
//! [`transport::http_client::Dispatcher`] attaches the stored bearer token
//! to every outbound call, and [`session::guard`] decides which views the
//! current session may see. The services under [`application`] are thin
//! typed wrappers over the remaining REST endpoints.

pub mod config;

pub mod constants;

pub mod error;

pub mod application;

pub mod session;

pub mod storage;

pub mod transport;

pub mod utils;
