//! Targets of an upstream, addressed as `upstreams/{upstream_id}/targets/{id}`.

#![deny(clippy::all, clippy::pedantic)]

use kconf_api_types::{TargetRequest, TargetResponse};
use reqwest::{Method, StatusCode};

use crate::client::{CliError, Ctx};
use crate::handlers::upstreams;
use crate::print::{render_created, render_deleted, render_list, render_one, text};

const SUB_RESOURCE: &str = "targets";
const ENTITY: &str = "upstream target";

pub async fn add(ctx: &Ctx, upstream_id: &str, req: &TargetRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(
            Method::POST,
            &[upstreams::RESOURCE, upstream_id, SUB_RESOURCE],
            Some(req),
        )
        .await?
        .expect_found(StatusCode::CREATED, "add upstream target", upstreams::ENTITY)?;
    render_created(ctx.options, &reply, ENTITY, |t: &TargetResponse| t.id.clone())
}

pub async fn query(ctx: &Ctx, upstream_id: &str, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .get(&[upstreams::RESOURCE, upstream_id, SUB_RESOURCE, id])
        .await?
        .expect_found(StatusCode::OK, "query upstream target", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn list(ctx: &Ctx, upstream_id: &str) -> Result<String, CliError> {
    let reply = ctx
        .get(&[upstreams::RESOURCE, upstream_id, SUB_RESOURCE])
        .await?
        .expect_found(StatusCode::OK, "list upstream targets", upstreams::ENTITY)?;
    render_list(
        ctx.options,
        &reply,
        "upstream target list",
        "No upstream targets",
        summary,
    )
}

pub async fn delete(ctx: &Ctx, upstream_id: &str, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .delete(&[upstreams::RESOURCE, upstream_id, SUB_RESOURCE, id])
        .await?
        .expect_found(StatusCode::NO_CONTENT, "delete upstream target", ENTITY)?;
    Ok(render_deleted(ctx.options, &reply))
}

fn summary(target: &TargetResponse) -> String {
    let weight = target
        .weight
        .map_or_else(|| "default".to_string(), |w| w.to_string());
    format!(
        "{}: {} (weight: {weight})",
        target.id,
        text(target.target.as_ref())
    )
}
