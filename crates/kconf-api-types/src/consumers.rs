use serde::{Deserialize, Serialize};

use crate::{EntityRef, JwtAlgorithm};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConsumerRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConsumerResponse {
    pub id: String,
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

// Credentials live under `consumers/{id}/<kind>`.

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BasicAuthRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BasicAuthResponse {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub consumer: Option<EntityRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KeyAuthRequest {
    /// Left empty, the gateway generates a key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Seconds until the key expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KeyAuthResponse {
    pub id: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub ttl: Option<u64>,
    #[serde(default)]
    pub consumer: Option<EntityRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JwtRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<JwtAlgorithm>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JwtResponse {
    pub id: String,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub consumer: Option<EntityRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumer_request_drops_empty_fields() {
        let req = ConsumerRequest {
            username: "bob-the-builder".into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).expect("json"),
            serde_json::json!({"username": "bob-the-builder"})
        );
    }

    #[test]
    fn consumer_response_accepts_null_tags() {
        let consumer: ConsumerResponse = serde_json::from_str(
            r#"{"id":"8a388226-80e8-4027-a486-25e4f7db5d21","custom_id":"4200","tags":null,"username":"bob-the-builder"}"#,
        )
        .expect("consumer");
        assert_eq!(consumer.custom_id.as_deref(), Some("4200"));
        assert!(consumer.tags.is_none());
    }

    #[test]
    fn key_auth_ttl_sent_only_when_set() {
        let req = KeyAuthRequest {
            key: "k".into(),
            ttl: None,
        };
        assert_eq!(
            serde_json::to_value(&req).expect("json"),
            serde_json::json!({"key": "k"})
        );
    }

    #[test]
    fn jwt_request_uses_wire_algorithm_name() {
        let req = JwtRequest {
            algorithm: Some(JwtAlgorithm::Rs256),
            key: "iss".into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).expect("json"),
            serde_json::json!({"algorithm": "RS256", "key": "iss"})
        );
    }
}
