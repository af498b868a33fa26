use serde::Deserialize;

/// Payload of the `destination?name=...` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDetails {
    pub description: String,
    pub photos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_body() {
        let body = r#"{"description":"City of light","photos":["a.jpg","b.jpg"]}"#;
        let details: DestinationDetails = serde_json::from_str(body).unwrap();
        assert_eq!(details.description, "City of light");
        assert_eq!(details.photos.len(), 2);
    }

    #[test]
    fn missing_photos_is_an_error() {
        let body = r#"{"description": "x"}"#;
        let err = serde_json::from_str::<DestinationDetails>(body).unwrap_err();
        assert!(err.to_string().contains("photos"));
    }
}
