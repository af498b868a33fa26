//! Resource identifiers and endpoint URL construction.

use url::Url;

use crate::error::{FetchError, FetchResult};

/// Production base of the travel-discovery API.
pub const DEFAULT_BASE_URL: &str = "https://travel.letsbuildthatapp.com/travel_discovery/";

/// Identifier of a remote discovery resource.
///
/// Immutable; created by the caller when a detail screen opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Destination details, keyed by display name.
    Destination { name: String },
    /// Restaurant details, keyed by numeric id.
    Restaurant { id: u32 },
    /// Creator profile, keyed by numeric id.
    User { id: u32 },
}

impl Resource {
    fn path(&self) -> &'static str {
        match self {
            Resource::Destination { .. } => "destination",
            Resource::Restaurant { .. } => "restaurant",
            Resource::User { .. } => "user",
        }
    }

    /// Build the request URL against `base`.
    ///
    /// Destination names are lowercased before encoding; the query
    /// serializer percent-encodes whatever remains.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Url`] if `base` cannot be joined with the
    /// endpoint path (e.g. a cannot-be-a-base URL).
    pub fn url(&self, base: &Url) -> FetchResult<Url> {
        let mut url = base.join(self.path()).map_err(FetchError::url)?;
        {
            let mut query = url.query_pairs_mut();
            match self {
                Resource::Destination { name } => {
                    query.append_pair("name", &name.to_lowercase());
                }
                Resource::Restaurant { id } => {
                    query.append_pair("id", &id.to_string());
                }
                Resource::User { id } => {
                    query.append_pair("id", &id.to_string());
                }
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn base() -> Url {
        Url::parse(DEFAULT_BASE_URL).unwrap()
    }

    #[rstest]
    #[case(
        Resource::Destination { name: "Paris".to_string() },
        "https://travel.letsbuildthatapp.com/travel_discovery/destination?name=paris"
    )]
    #[case(
        Resource::Restaurant { id: 0 },
        "https://travel.letsbuildthatapp.com/travel_discovery/restaurant?id=0"
    )]
    #[case(
        Resource::User { id: 2 },
        "https://travel.letsbuildthatapp.com/travel_discovery/user?id=2"
    )]
    fn builds_endpoint_urls(#[case] resource: Resource, #[case] expected: &str) {
        assert_eq!(resource.url(&base()).unwrap().as_str(), expected);
    }

    #[test]
    fn destination_name_is_lowercased_and_encoded() {
        let resource = Resource::Destination {
            name: "New York".to_string(),
        };
        let url = resource.url(&base()).unwrap();
        assert_eq!(url.query(), Some("name=new+york"));
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let base = Url::parse("mailto:nobody@example.com").unwrap();
        let err = Resource::Restaurant { id: 1 }.url(&base).unwrap_err();
        assert!(matches!(err, FetchError::Url { .. }));
    }
}
