#![deny(clippy::all, clippy::pedantic)]

use kconf_api_types::{ServiceRequest, ServiceResponse};
use reqwest::{Method, StatusCode};

use crate::client::{CliError, Ctx};
use crate::print::{render_created, render_deleted, render_list, render_one, text};

const RESOURCE: &str = "services";
const ENTITY: &str = "service";

pub async fn add(ctx: &Ctx, req: &ServiceRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::POST, &[RESOURCE], Some(req))
        .await?
        .expect(StatusCode::CREATED, "add service")?;
    render_created(ctx.options, &reply, ENTITY, |s: &ServiceResponse| s.id.clone())
}

pub async fn query(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::OK, "query service", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn list(ctx: &Ctx) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE])
        .await?
        .expect(StatusCode::OK, "list service")?;
    render_list(ctx.options, &reply, "service list", "No services", summary)
}

pub async fn update(ctx: &Ctx, id: &str, req: &ServiceRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::PATCH, &[RESOURCE, id], Some(req))
        .await?
        .expect_found(StatusCode::OK, "patch service", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn delete(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .delete(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::NO_CONTENT, "delete service", ENTITY)?;
    Ok(render_deleted(ctx.options, &reply))
}

fn summary(service: &ServiceResponse) -> String {
    format!(
        "{}: {} - {} (enabled: {})",
        service.id,
        text(service.name.as_ref()),
        service.url(),
        service.enabled.unwrap_or(true)
    )
}
