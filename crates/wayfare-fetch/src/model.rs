//! One-shot observable fetch model.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};
use url::Url;
use wayfare_net::Net;

use crate::{
    endpoint::Resource,
    error::{FetchError, FetchResult},
    state::{FetchState, StateCell},
};

/// Owns the single background request for a typed remote resource and
/// publishes its [`FetchState`] for observation.
///
/// A model issues at most one request over its lifetime. The state is
/// `Loading` synchronously at construction, then settles exactly once
/// into `Ready` or `Failed`. Dropping the model cancels an in-flight
/// request; nobody observes a surface that no longer exists.
pub struct FetchModel<T> {
    rx: watch::Receiver<FetchState<T>>,
    cancel: CancellationToken,
}

impl<T> FetchModel<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    /// Issue one GET for `url` on a background task.
    ///
    /// Returns immediately; the returned model reads `Loading` until
    /// the response resolves.
    #[must_use]
    pub fn spawn(net: Arc<dyn Net>, url: Url) -> Self {
        let (cell, rx) = StateCell::new();
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = task_cancel.cancelled() => {
                    trace!(url = %url, "fetch cancelled before completion");
                }
                outcome = fetch_once::<T>(net, url.clone()) => match outcome {
                    Ok(payload) => {
                        debug!(url = %url, "fetch ready");
                        cell.complete(FetchState::Ready(payload));
                    }
                    Err(err) => {
                        debug!(url = %url, error = %err, "fetch failed");
                        cell.complete(FetchState::Failed(err.to_string()));
                    }
                },
            }
        });

        Self { rx, cancel }
    }

    /// Build the endpoint URL for `resource` and fetch it.
    ///
    /// URL construction failure yields a model already settled in
    /// `Failed` rather than one stuck in `Loading`.
    #[must_use]
    pub fn request(net: Arc<dyn Net>, resource: &Resource, base: &Url) -> Self {
        match resource.url(base) {
            Ok(url) => Self::spawn(net, url),
            Err(err) => Self::failed(err),
        }
    }
}

impl<T> FetchModel<T> {
    /// A model born in the terminal `Failed` state. No request is issued.
    #[must_use]
    pub fn failed(err: FetchError) -> Self {
        let (_cell, rx) = StateCell::failed(err.to_string());
        Self {
            rx,
            cancel: CancellationToken::new(),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> FetchState<T>
    where
        T: Clone,
    {
        self.rx.borrow().clone()
    }

    /// Independent receiver over this model's state changes.
    ///
    /// The display layer holds one of these and re-renders whenever
    /// `changed()` resolves.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.rx.clone()
    }

    /// Wait until the state settles, then return it.
    pub async fn terminal(&self) -> FetchState<T>
    where
        T: Clone,
    {
        let mut rx = self.rx.clone();
        loop {
            if rx.borrow().is_terminal() {
                return rx.borrow().clone();
            }
            // Err means the publishing task is gone; the current value
            // is all there will ever be.
            if rx.changed().await.is_err() {
                return rx.borrow().clone();
            }
        }
    }
}

impl<T> Drop for FetchModel<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn fetch_once<T: DeserializeOwned>(net: Arc<dyn Net>, url: Url) -> FetchResult<T> {
    let bytes = net.get_bytes(url, None).await?;
    if bytes.is_empty() {
        return Err(FetchError::EmptyBody);
    }
    serde_json::from_slice(&bytes).map_err(FetchError::decode)
}
