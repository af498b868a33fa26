//! Canned JSON bodies matching the travel-discovery endpoints.

/// Body for `destination?name=...`.
#[must_use]
pub fn destination_body() -> &'static str {
    r#"{
        "description": "City of light",
        "photos": ["a.jpg", "b.jpg"]
    }"#
}

/// Body for `restaurant?id=...`.
#[must_use]
pub fn restaurant_body() -> &'static str {
    r#"{
        "description": "Izakaya dining near the fish market.",
        "popularDishes": [
            {"name": "Tuna tataki", "price": "$12", "numPhotos": 3, "photo": "tataki.jpg"}
        ],
        "photos": ["front.jpg", "bar.jpg", "kitchen.jpg"],
        "reviews": [
            {
                "user": {
                    "username": "amy",
                    "firstName": "Amy",
                    "lastName": "Adams",
                    "profileImage": "amy.jpg"
                },
                "rating": 5,
                "text": "Great spot."
            }
        ]
    }"#
}

/// Body for `user?id=...`.
#[must_use]
pub fn user_body() -> &'static str {
    r##"{
        "username": "amy.adams",
        "firstName": "Amy",
        "lastName": "Adams",
        "profileImage": "amy.jpg",
        "followers": 59394,
        "following": 2112,
        "posts": [
            {
                "title": "Street food tour",
                "imageUrl": "post1.jpg",
                "views": "30k",
                "hashtags": ["#food", "#travel"]
            }
        ]
    }"##
}
