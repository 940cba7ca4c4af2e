use serde::{Deserialize, Serialize};

use crate::domain::Gender;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateNamesRequest {
    pub user_input: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateNamesResponse {
    pub success: bool,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePhotoRequest {
    pub age: u8,
    pub gender: Gender,
    pub style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePhotoResponse {
    pub success: bool,
    #[serde(default)]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_request_matches_collaborator_contract() {
        let request = GeneratePhotoRequest {
            age: 7,
            gender: Gender::Girl,
            style: "photorealistic portrait".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "age": 7,
                "gender": "girl",
                "style": "photorealistic portrait",
            })
        );
    }

    #[test]
    fn names_response_tolerates_missing_payload_fields_on_failure() {
        let response: GenerateNamesResponse =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!response.success);
        assert!(response.names.is_empty());
        assert!(response.suggestions.is_empty());
    }
}
