use serde::Deserialize;

/// Payload of the `user?id=...` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: String,
    pub followers: u64,
    pub following: u64,
    pub posts: Vec<Post>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub image_url: String,
    /// Pre-formatted view count ("30k"), kept as the API delivers it.
    pub views: String,
    pub hashtags: Vec<String>,
}
