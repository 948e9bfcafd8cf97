#![deny(clippy::all, clippy::pedantic)]

use kconf_api_types::{RouteRequest, RouteResponse};
use reqwest::{Method, StatusCode};

use crate::client::{CliError, Ctx};
use crate::print::{bracketed, render_created, render_deleted, render_list, render_one, text};

const RESOURCE: &str = "routes";
const ENTITY: &str = "route";

pub async fn add(ctx: &Ctx, req: &RouteRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::POST, &[RESOURCE], Some(req))
        .await?
        .expect(StatusCode::CREATED, "add route")?;
    render_created(ctx.options, &reply, ENTITY, |r: &RouteResponse| r.id.clone())
}

pub async fn query(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::OK, "query route", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn list(ctx: &Ctx) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE])
        .await?
        .expect(StatusCode::OK, "list route")?;
    render_list(ctx.options, &reply, "route list", "No routes", summary)
}

/// Without `service`, the route stays attached to its current service.
pub async fn update(ctx: &Ctx, id: &str, req: &RouteRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::PATCH, &[RESOURCE, id], Some(req))
        .await?
        .expect_found(StatusCode::OK, "patch route", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn delete(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .delete(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::NO_CONTENT, "delete route", ENTITY)?;
    Ok(render_deleted(ctx.options, &reply))
}

fn summary(route: &RouteResponse) -> String {
    format!(
        "{}: {} - {} {}:{} --> Service Id: {}",
        route.id,
        text(route.name.as_ref()),
        bracketed(route.methods.as_ref()),
        bracketed(route.protocols.as_ref()),
        bracketed(route.paths.as_ref()),
        route.service_id()
    )
}
