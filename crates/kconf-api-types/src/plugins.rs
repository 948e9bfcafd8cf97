use serde::{Deserialize, Serialize};

use crate::{EntityRef, SizeUnit, SyslogLevel, ref_id};

/// Plugin attached to a service and/or route through `POST /plugins`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PluginRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PluginResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub instance_name: Option<String>,
    #[serde(default)]
    pub protocols: Option<Vec<String>>,
    #[serde(default)]
    pub service: Option<EntityRef>,
    #[serde(default)]
    pub route: Option<EntityRef>,
    #[serde(default)]
    pub consumer: Option<EntityRef>,
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl PluginResponse {
    #[must_use]
    pub fn service_id(&self) -> &str {
        ref_id(self.service.as_ref())
    }

    #[must_use]
    pub fn route_id(&self) -> &str {
        ref_id(self.route.as_ref())
    }

    #[must_use]
    pub fn consumer_id(&self) -> &str {
        ref_id(self.consumer.as_ref())
    }
}

/// Configuration block of a plugin that can be attached to a consumer.
pub trait PluginConfig: Serialize {
    /// Plugin name as registered in the gateway.
    const NAME: &'static str;
}

/// Body of `POST /consumers/{id}/plugins`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumerPluginRequest<C> {
    pub name: &'static str,
    pub config: C,
}

impl<C: PluginConfig> ConsumerPluginRequest<C> {
    pub fn new(config: C) -> Self {
        Self {
            name: C::NAME,
            config,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IpRestrictionConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deny: Vec<String>,
}

impl PluginConfig for IpRestrictionConfig {
    const NAME: &'static str = "ip-restriction";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateLimitingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error_message: String,
}

impl PluginConfig for RateLimitingConfig {
    const NAME: &'static str = "rate-limiting";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestSizeLimitingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_payload_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_unit: Option<SizeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_content_length: Option<bool>,
}

impl PluginConfig for RequestSizeLimitingConfig {
    const NAME: &'static str = "request-size-limiting";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyslogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<SyslogLevel>,
}

impl PluginConfig for SyslogConfig {
    const NAME: &'static str = "syslog";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_update_without_name_omits_it() {
        let req = PluginRequest {
            route: EntityRef::from_id("r1"),
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).expect("json"),
            serde_json::json!({"route": {"id": "r1"}, "enabled": false})
        );
    }

    #[test]
    fn consumer_plugin_carries_registered_name() {
        let req = ConsumerPluginRequest::new(RateLimitingConfig {
            minute: Some(5),
            error_message: "slow down".into(),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&req).expect("json"),
            serde_json::json!({
                "name": "rate-limiting",
                "config": {"minute": 5, "error_message": "slow down"}
            })
        );
    }

    #[test]
    fn request_size_limit_config_uses_wire_unit() {
        let req = ConsumerPluginRequest::new(RequestSizeLimitingConfig {
            allowed_payload_size: Some(128),
            size_unit: Some(SizeUnit::Kilobytes),
            require_content_length: None,
        });
        assert_eq!(
            serde_json::to_value(&req).expect("json"),
            serde_json::json!({
                "name": "request-size-limiting",
                "config": {"allowed_payload_size": 128, "size_unit": "kilobytes"}
            })
        );
    }
}
