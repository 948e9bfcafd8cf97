//! Request and response payloads for the Kong admin API.
//!
//! Request types follow the gateway's "absent means unchanged" rule: empty
//! strings, empty lists and unset optional values are never serialized, so a
//! PATCH only carries the fields the caller actually supplied. Response types
//! accept `null` or missing fields, which the gateway emits freely.

mod consumers;
mod enums;
mod plugins;
mod routes;
mod services;
mod upstreams;

use serde::{Deserialize, Serialize};

pub use consumers::{
    BasicAuthRequest, BasicAuthResponse, ConsumerRequest, ConsumerResponse, JwtRequest,
    JwtResponse, KeyAuthRequest, KeyAuthResponse,
};
pub use enums::{BalancingAlgorithm, JwtAlgorithm, SizeUnit, SyslogLevel};
pub use plugins::{
    ConsumerPluginRequest, IpRestrictionConfig, PluginConfig, PluginRequest, PluginResponse,
    RateLimitingConfig, RequestSizeLimitingConfig, SyslogConfig,
};
pub use routes::{RouteRequest, RouteResponse};
pub use services::{ServiceRequest, ServiceResponse};
pub use upstreams::{TargetRequest, TargetResponse, UpstreamRequest, UpstreamResponse};

/// Reference to another entity by id, e.g. `{"service": {"id": "..."}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EntityRef {
    pub id: String,
}

impl EntityRef {
    /// Builds a reference unless `id` is empty.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        if id.is_empty() {
            None
        } else {
            Some(Self { id: id.to_string() })
        }
    }
}

/// Envelope used by every collection endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Body of `GET /status`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub database: Option<DatabaseStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseStatus {
    #[serde(default)]
    pub reachable: bool,
}

pub(crate) fn ref_id(entity: Option<&EntityRef>) -> &str {
    entity.map_or("", |e| e.id.as_str())
}
