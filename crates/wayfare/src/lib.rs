#![forbid(unsafe_code)]

//! # Wayfare
//!
//! Facade crate for the travel-discovery client: typed one-shot fetch
//! models for detail screens, plus the paging controller and theme
//! values a display layer consumes.
//!
//! ## Quick start
//!
//! ```ignore
//! use wayfare::prelude::*;
//!
//! let discover = Discover::new(DiscoverConfig::default());
//!
//! // Opening a destination screen issues exactly one fetch.
//! let model = discover.destination_details("Paris");
//! let mut rx = model.subscribe();
//! while rx.changed().await.is_ok() {
//!     // re-render from rx.borrow()
//! }
//! ```

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod carousel {
    pub use wayfare_carousel::*;
}

pub mod fetch {
    pub use wayfare_fetch::*;
}

pub mod models {
    pub use wayfare_models::*;
}

pub mod net {
    pub use wayfare_net::*;
}

// ── Discover client ─────────────────────────────────────────────────────

mod config;
mod discover;

pub use config::{DiscoverConfig, IndicatorColors, Rgb, Theme};
pub use discover::Discover;

// ── Prelude ─────────────────────────────────────────────────────────────

pub mod prelude {
    pub use wayfare_carousel::{Carousel, Page};
    pub use wayfare_fetch::{FetchModel, FetchState, Resource};
    pub use wayfare_models::{DestinationDetails, RestaurantDetails, UserDetails};
    pub use wayfare_net::{HttpClient, Net, NetOptions};

    pub use crate::{Discover, DiscoverConfig, Theme};
}
