#![forbid(unsafe_code)]

//! Minimal async HTTP layer for the wayfare travel-discovery stack.
//!
//! One concern only: fetch the full body of a remote JSON resource.
//! No streaming, no ranges, no retry layer — a failed request surfaces
//! as a [`NetError`] and the caller decides what to render.

mod client;
mod error;
mod traits;
mod types;

pub use crate::{
    client::HttpClient,
    error::{NetError, NetResult},
    traits::Net,
    types::{Headers, NetOptions},
};
