#![forbid(unsafe_code)]

//! Typed payloads and catalog entities for travel discovery.
//!
//! Remote payloads mirror the JSON bodies of the discovery API
//! (camelCase keys). Catalog entities are the static seed data the
//! discover screen is built from; they carry the coordinates and image
//! names a display layer needs to open a detail screen.

mod catalog;
mod destination;
mod restaurant;
mod user;

pub use catalog::{
    categories, paris_attractions, popular_destinations, popular_restaurants, trending_creators,
    Attraction, Category, Destination, Restaurant, User,
};
pub use destination::DestinationDetails;
pub use restaurant::{Dish, RestaurantDetails, Review, ReviewUser};
pub use user::{Post, UserDetails};
