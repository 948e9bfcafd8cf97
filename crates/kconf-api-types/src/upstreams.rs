use serde::{Deserialize, Serialize};

use crate::{BalancingAlgorithm, EntityRef};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UpstreamRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<BalancingAlgorithm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpstreamResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Backend address (`host:port`) balanced by an upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TargetRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TargetResponse {
    pub id: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub upstream: Option<EntityRef>,
}
