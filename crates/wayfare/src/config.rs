//! Configuration for [`Discover`](crate::Discover).

use url::Url;
use wayfare_fetch::DEFAULT_BASE_URL;
use wayfare_net::NetOptions;

/// Unified configuration for creating a [`Discover`](crate::Discover) client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoverConfig {
    /// Base URL of the discovery API.
    pub base_url: Url,
    /// Network configuration (timeout, connection pool).
    pub net: NetOptions,
    /// Display theme handed to the rendering layer.
    pub theme: Theme,
}

impl DiscoverConfig {
    /// Config pointed at a non-default API base (e.g. a test server).
    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }
}

impl Default for DiscoverConfig {
    /// # Panics
    ///
    /// Panics if the built-in base URL constant fails to parse.
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("parse default base URL"),
            net: NetOptions::default(),
            theme: Theme::default(),
        }
    }
}

/// Explicit display theme.
///
/// Passed into the rendering layer as a value; constructing a screen
/// component never mutates process-wide appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Theme {
    pub page_indicator: IndicatorColors,
}

/// Tints for the page-indicator dots under a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorColors {
    /// Dot for the currently visible page.
    pub current: Rgb,
    /// Dots for the remaining pages.
    pub inactive: Rgb,
}

impl Default for IndicatorColors {
    fn default() -> Self {
        Self {
            current: Rgb::new(255, 59, 48),
            inactive: Rgb::new(229, 229, 234),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_production_api() {
        let config = DiscoverConfig::default();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn with_base_url_keeps_other_defaults() {
        let base = Url::parse("http://127.0.0.1:8080/").unwrap();
        let config = DiscoverConfig::with_base_url(base.clone());
        assert_eq!(config.base_url, base);
        assert_eq!(config.net, NetOptions::default());
        assert_eq!(config.theme, Theme::default());
    }
}
