use serde::{Deserialize, Serialize};

use crate::{EntityRef, ref_id};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RouteRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<EntityRef>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub protocols: Option<Vec<String>>,
    #[serde(default)]
    pub methods: Option<Vec<String>>,
    #[serde(default)]
    pub paths: Option<Vec<String>>,
    #[serde(default)]
    pub service: Option<EntityRef>,
}

impl RouteResponse {
    #[must_use]
    pub fn service_id(&self) -> &str {
        ref_id(self.service.as_ref())
    }
}
