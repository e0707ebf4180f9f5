mod common;
mod test_checkout;
mod test_dispatcher;
mod test_guard;
mod test_session;
