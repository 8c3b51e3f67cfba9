//! Request middleware applied by [`crate::router::build_app_router`].

pub mod timeout;
