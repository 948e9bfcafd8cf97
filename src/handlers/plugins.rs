#![deny(clippy::all, clippy::pedantic)]

use kconf_api_types::{PluginRequest, PluginResponse};
use reqwest::{Method, StatusCode};

use crate::client::{CliError, Ctx};
use crate::print::{bracketed, render_created, render_deleted, render_list, render_one, text};

const RESOURCE: &str = "plugins";
const ENTITY: &str = "plugin";

pub async fn add(ctx: &Ctx, req: &PluginRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::POST, &[RESOURCE], Some(req))
        .await?
        .expect(StatusCode::CREATED, "add plugin")?;
    render_created(ctx.options, &reply, ENTITY, |p: &PluginResponse| p.id.clone())
}

pub async fn query(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::OK, "query plugin", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn list(ctx: &Ctx) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE])
        .await?
        .expect(StatusCode::OK, "list plugins")?;
    render_list(ctx.options, &reply, "plugin list", "No plugins", summary)
}

/// The plugin name cannot change once created, so `req.name` is normally empty.
pub async fn update(ctx: &Ctx, id: &str, req: &PluginRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::PATCH, &[RESOURCE, id], Some(req))
        .await?
        .expect_found(StatusCode::OK, "patch plugin", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn delete(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .delete(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::NO_CONTENT, "delete plugin", ENTITY)?;
    Ok(render_deleted(ctx.options, &reply))
}

pub(crate) fn summary(plugin: &PluginResponse) -> String {
    format!(
        "{}: {} - {}: serviceId: {} ; routeId: {} ; consumerId: {} (enabled: {})",
        plugin.id,
        text(plugin.name.as_ref()),
        bracketed(plugin.protocols.as_ref()),
        plugin.service_id(),
        plugin.route_id(),
        plugin.consumer_id(),
        plugin.enabled.unwrap_or(true)
    )
}
