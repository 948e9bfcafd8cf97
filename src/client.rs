#![deny(clippy::all, clippy::pedantic)]

use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use serde_json::Value;
use tracing::debug;

/// Payload fields masked in debug logs.
const REDACTED_FIELDS: [&str; 3] = ["password", "secret", "key"];

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid Kong address: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Payload(#[from] serde_json::Error),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("fail sending {operation} command to Kong: {status}")]
    Failed { operation: String, status: StatusCode },
    #[error("error sending check status command to Kong: {0}")]
    Status(StatusCode),
    #[error("{0}")]
    Usage(String),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn failed(operation: impl Into<String>, status: StatusCode) -> Self {
        Self::Failed {
            operation: operation.into(),
            status,
        }
    }
}

/// Output selection shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub verbose: bool,
    pub json_output: bool,
}

#[derive(Clone, Debug)]
pub struct Ctx {
    pub client: Client,
    pub base: Url,
    pub options: Options,
}

impl Ctx {
    pub fn new(base: Url, options: Options) -> Result<Self, CliError> {
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            client,
            base,
            options,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("kconf/", env!("CARGO_PKG_VERSION"))
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> Result<Url, CliError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| CliError::usage(format!("Kong address cannot be a base: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues one request and buffers the whole response.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Reply, CliError> {
        let url = self.url(segments)?;
        let mut req = self.client.request(method.clone(), url.clone());
        if let Some(b) = body {
            let payload = serde_json::to_value(b)?;
            debug!(%method, %url, payload = %redacted(payload.clone()), "sending request");
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json; charset=UTF-8")
                .body(serde_json::to_vec(&payload)?);
        } else {
            debug!(%method, %url, "sending request");
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(%status, bytes = body.len(), "received response");
        Ok(Reply { status, body })
    }

    pub async fn get(&self, segments: &[&str]) -> Result<Reply, CliError> {
        self.send::<()>(Method::GET, segments, None).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<Reply, CliError> {
        self.send::<()>(Method::DELETE, segments, None).await
    }
}

/// Buffered gateway response.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    /// Fails unless the status is `expected`.
    pub fn expect(self, expected: StatusCode, operation: &str) -> Result<Self, CliError> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(CliError::failed(operation, self.status))
        }
    }

    /// Like [`Reply::expect`], but a 404 means `entity` does not exist.
    pub fn expect_found(
        self,
        expected: StatusCode,
        operation: &str,
        entity: &'static str,
    ) -> Result<Self, CliError> {
        if self.status == StatusCode::NOT_FOUND {
            return Err(CliError::NotFound(entity));
        }
        self.expect(expected, operation)
    }

    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, CliError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

fn redacted(mut value: Value) -> Value {
    match &mut value {
        Value::Object(fields) => {
            for (name, field) in fields.iter_mut() {
                *field = if REDACTED_FIELDS.contains(&name.as_str()) {
                    Value::from("***")
                } else {
                    redacted(field.take())
                };
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                *item = redacted(item.take());
            }
        }
        _ => {}
    }
    value
}
