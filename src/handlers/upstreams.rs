#![deny(clippy::all, clippy::pedantic)]

use kconf_api_types::{UpstreamRequest, UpstreamResponse};
use reqwest::{Method, StatusCode};

use crate::client::{CliError, Ctx};
use crate::print::{bracketed, render_created, render_deleted, render_list, render_one, text};

pub(crate) const RESOURCE: &str = "upstreams";
pub(crate) const ENTITY: &str = "upstream";

pub async fn add(ctx: &Ctx, req: &UpstreamRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::POST, &[RESOURCE], Some(req))
        .await?
        .expect(StatusCode::CREATED, "add upstream")?;
    render_created(ctx.options, &reply, ENTITY, |u: &UpstreamResponse| u.id.clone())
}

pub async fn query(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::OK, "query upstream", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn list(ctx: &Ctx) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE])
        .await?
        .expect(StatusCode::OK, "list upstreams")?;
    render_list(ctx.options, &reply, "upstream list", "No upstreams", summary)
}

pub async fn update(ctx: &Ctx, id: &str, req: &UpstreamRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::PATCH, &[RESOURCE, id], Some(req))
        .await?
        .expect_found(StatusCode::OK, "patch upstream", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn delete(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .delete(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::NO_CONTENT, "delete upstream", ENTITY)?;
    Ok(render_deleted(ctx.options, &reply))
}

fn summary(upstream: &UpstreamResponse) -> String {
    format!(
        "{}: {} - {} ({})",
        upstream.id,
        text(upstream.name.as_ref()),
        text(upstream.algorithm.as_ref()),
        bracketed(upstream.tags.as_ref())
    )
}
