use serde::{Deserialize, Serialize};

/// Signing algorithms accepted for JWT credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum JwtAlgorithm {
    #[serde(rename = "HS256")]
    #[cfg_attr(feature = "clap", value(name = "HS256"))]
    Hs256,
    #[serde(rename = "HS384")]
    #[cfg_attr(feature = "clap", value(name = "HS384"))]
    Hs384,
    #[serde(rename = "HS512")]
    #[cfg_attr(feature = "clap", value(name = "HS512"))]
    Hs512,
    #[serde(rename = "RS256")]
    #[cfg_attr(feature = "clap", value(name = "RS256"))]
    Rs256,
    #[serde(rename = "RS384")]
    #[cfg_attr(feature = "clap", value(name = "RS384"))]
    Rs384,
    #[serde(rename = "RS512")]
    #[cfg_attr(feature = "clap", value(name = "RS512"))]
    Rs512,
    #[serde(rename = "ES256")]
    #[cfg_attr(feature = "clap", value(name = "ES256"))]
    Es256,
    #[serde(rename = "ES384")]
    #[cfg_attr(feature = "clap", value(name = "ES384"))]
    Es384,
    #[serde(rename = "ES512")]
    #[cfg_attr(feature = "clap", value(name = "ES512"))]
    Es512,
    #[serde(rename = "PS256")]
    #[cfg_attr(feature = "clap", value(name = "PS256"))]
    Ps256,
    #[serde(rename = "PS384")]
    #[cfg_attr(feature = "clap", value(name = "PS384"))]
    Ps384,
    #[serde(rename = "PS512")]
    #[cfg_attr(feature = "clap", value(name = "PS512"))]
    Ps512,
    #[cfg_attr(feature = "clap", value(name = "EdDSA"))]
    EdDSA,
}


/// Load-balancing algorithm of an upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum BalancingAlgorithm {
    RoundRobin,
    ConsistentHashing,
    LeastConnections,
    Latency,
}


/// Unit of `allowed_payload_size` for the request-size-limiting plugin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Megabytes,
    Kilobytes,
    Bytes,
}


/// Severity threshold of the syslog plugin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SyslogLevel {
    Debug,
    Info,
    Notice,
    Warning,
    Err,
    Crit,
    Alert,
    Emerg,
}
