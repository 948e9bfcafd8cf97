use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ServiceRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Shorthand the gateway splits into protocol, host, port and path.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ServiceResponse {
    /// Reassembles `protocol://host:port/path` from the decomposed fields.
    #[must_use]
    pub fn url(&self) -> String {
        let protocol = self.protocol.as_deref().unwrap_or("http");
        let host = self.host.as_deref().unwrap_or_default();
        let path = self.path.as_deref().unwrap_or_default();
        match self.port {
            Some(port) => format!("{protocol}://{host}:{port}{path}"),
            None => format!("{protocol}://{host}{path}"),
        }
    }
}
