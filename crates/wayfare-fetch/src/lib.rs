#![forbid(unsafe_code)]

//! One-shot observable fetch models.
//!
//! A [`FetchModel`] owns a single background request for a typed remote
//! resource and publishes its progress as a [`FetchState`]: `Loading`
//! until the response resolves, then exactly one terminal transition to
//! `Ready` or `Failed`. A display layer subscribes and re-renders on
//! change; it never drives the fetch.
//!
//! There is no retry and no refresh: re-entering a screen constructs a
//! new model. Dropping a model cancels its in-flight request.

mod endpoint;
mod error;
mod model;
mod state;

pub use endpoint::{Resource, DEFAULT_BASE_URL};
pub use error::{FetchError, FetchResult};
pub use model::FetchModel;
pub use state::FetchState;
