//! Typed entry points for the discovery detail screens.

use std::sync::Arc;

use tracing::debug;
use wayfare_fetch::{FetchModel, Resource};
use wayfare_models::{DestinationDetails, RestaurantDetails, UserDetails};
use wayfare_net::{HttpClient, Net};

use crate::config::DiscoverConfig;

/// Travel-discovery client.
///
/// One instance serves the whole app: the underlying HTTP client is
/// shared across fetch models, which are otherwise fully independent.
/// Each call issues exactly one request and returns an observable
/// model; a call site that cannot form a URL gets a model already in
/// its terminal failed state.
pub struct Discover {
    net: Arc<HttpClient>,
    config: DiscoverConfig,
}

impl Discover {
    #[must_use]
    pub fn new(config: DiscoverConfig) -> Self {
        Self {
            net: Arc::new(HttpClient::new(config.net.clone())),
            config,
        }
    }

    /// Configuration this client was built with (base URL, theme).
    #[must_use]
    pub fn config(&self) -> &DiscoverConfig {
        &self.config
    }

    /// Fetch details for a destination by display name.
    #[must_use]
    pub fn destination_details(&self, name: &str) -> FetchModel<DestinationDetails> {
        self.request(Resource::Destination {
            name: name.to_string(),
        })
    }

    /// Fetch details for a restaurant by id.
    #[must_use]
    pub fn restaurant_details(&self, id: u32) -> FetchModel<RestaurantDetails> {
        self.request(Resource::Restaurant { id })
    }

    /// Fetch a creator profile by id.
    #[must_use]
    pub fn user_details(&self, id: u32) -> FetchModel<UserDetails> {
        self.request(Resource::User { id })
    }

    fn request<T>(&self, resource: Resource) -> FetchModel<T>
    where
        T: serde::de::DeserializeOwned + Send + Sync + 'static,
    {
        debug!(?resource, "opening fetch model");
        let net: Arc<dyn Net> = self.net.clone();
        FetchModel::request(net, &resource, &self.config.base_url)
    }
}
