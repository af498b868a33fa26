//! Static catalog the discover screen is seeded with.
//!
//! These are not fetched; they are the entry points from which detail
//! screens (and their fetch models) are opened.

/// A destination tile on the discover screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    pub name: String,
    pub country: String,
    pub image_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A restaurant tile on the discover screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restaurant {
    pub name: String,
    pub image_name: String,
}

/// A creator tile on the discover screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub image_name: String,
}

/// A point of interest rendered as a map annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Attraction {
    pub name: String,
    pub image_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A browse category on the discover screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub icon_name: String,
}

fn destination(name: &str, country: &str, image: &str, lat: f64, lon: f64) -> Destination {
    Destination {
        name: name.to_string(),
        country: country.to_string(),
        image_name: image.to_string(),
        latitude: lat,
        longitude: lon,
    }
}

/// Destinations shown in the "Popular destinations" row.
#[must_use]
pub fn popular_destinations() -> Vec<Destination> {
    vec![
        destination("Paris", "France", "eiffel", 48.859565, 2.353235),
        destination("Tokyo", "Japan", "japan", 35.679693, 139.771913),
        destination("New York", "USA", "newyork", 40.71592, -74.0055),
    ]
}

/// Restaurants shown in the "Popular places to eat" row.
#[must_use]
pub fn popular_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            name: "Japan's Finest Tapas".to_string(),
            image_name: "tapas".to_string(),
        },
        Restaurant {
            name: "Bar & Grill".to_string(),
            image_name: "bar_grill".to_string(),
        },
    ]
}

/// Creators shown in the "Trending creators" row.
#[must_use]
pub fn trending_creators() -> Vec<User> {
    vec![
        User {
            id: 0,
            name: "Amy Adams".to_string(),
            image_name: "amy".to_string(),
        },
        User {
            id: 1,
            name: "Billy Childs".to_string(),
            image_name: "billy".to_string(),
        },
        User {
            id: 2,
            name: "Sam Smith".to_string(),
            image_name: "sam".to_string(),
        },
    ]
}

/// Browse categories at the top of the discover screen.
#[must_use]
pub fn categories() -> Vec<Category> {
    [
        ("Art", "paintpalette.fill"),
        ("Sports", "sportscourt.fill"),
        ("Live Events", "music.mic"),
        ("Food", "music.mic"),
        ("History", "music.mic"),
    ]
    .into_iter()
    .map(|(name, icon)| Category {
        name: name.to_string(),
        icon_name: icon.to_string(),
    })
    .collect()
}

/// Map annotations for the Paris destination screen.
#[must_use]
pub fn paris_attractions() -> Vec<Attraction> {
    [
        ("Eiffel Tower", "eiffel_tower", 48.858605, 2.2946),
        ("Champs-Elysees", "new_york", 48.866867, 2.311780),
        ("Louvre Museum", "art2", 48.860288, 2.337789),
    ]
    .into_iter()
    .map(|(name, image, lat, lon)| Attraction {
        name: name.to_string(),
        image_name: image.to_string(),
        latitude: lat,
        longitude: lon,
    })
    .collect()
}
