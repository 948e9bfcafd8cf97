//! Plugins scoped to a single consumer through `consumers/{id}/plugins`.

#![deny(clippy::all, clippy::pedantic)]

use kconf_api_types::{ConsumerPluginRequest, PluginConfig, PluginResponse};
use reqwest::{Method, StatusCode};

use crate::client::{CliError, Ctx};
use crate::handlers::{consumers, plugins};
use crate::print::{render_created, render_list};

const SUB_RESOURCE: &str = "plugins";
const SUB_ENTITY: &str = "plugin";

/// Attaches a plugin of type `C` to the consumer.
pub async fn add<C: PluginConfig>(
    ctx: &Ctx,
    consumer_id: &str,
    config: C,
) -> Result<String, CliError> {
    let req = ConsumerPluginRequest::new(config);
    let reply = ctx
        .send(
            Method::POST,
            &[consumers::RESOURCE, consumer_id, SUB_RESOURCE],
            Some(&req),
        )
        .await?
        .expect_found(
            StatusCode::CREATED,
            &format!("add consumer {}", C::NAME),
            consumers::ENTITY,
        )?;
    render_created(ctx.options, &reply, SUB_ENTITY, |p: &PluginResponse| p.id.clone())
}

pub async fn list(ctx: &Ctx, consumer_id: &str) -> Result<String, CliError> {
    let reply = ctx
        .get(&[consumers::RESOURCE, consumer_id, SUB_RESOURCE])
        .await?
        .expect_found(StatusCode::OK, "list consumer plugins", consumers::ENTITY)?;
    render_list(
        ctx.options,
        &reply,
        "consumer plugin list",
        "No plugins",
        plugins::summary,
    )
}
