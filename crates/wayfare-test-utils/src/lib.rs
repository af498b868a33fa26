#![forbid(unsafe_code)]

//! Shared test helpers for the wayfare workspace.

mod fixtures;
mod http_server;

pub use fixtures::{destination_body, restaurant_body, user_body};
pub use http_server::{json_route, TestHttpServer};
