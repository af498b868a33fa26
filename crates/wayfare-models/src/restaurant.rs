use serde::Deserialize;

/// Payload of the `restaurant?id=...` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetails {
    pub description: String,
    pub popular_dishes: Vec<Dish>,
    pub photos: Vec<String>,
    pub reviews: Vec<Review>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub name: String,
    pub price: String,
    pub num_photos: u32,
    pub photo: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user: ReviewUser,
    pub rating: u8,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: String,
}
