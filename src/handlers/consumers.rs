#![deny(clippy::all, clippy::pedantic)]

use kconf_api_types::{ConsumerRequest, ConsumerResponse};
use reqwest::{Method, StatusCode};

use crate::client::{CliError, Ctx};
use crate::print::{bracketed, render_created, render_deleted, render_list, render_one, text};

pub(crate) const RESOURCE: &str = "consumers";
pub(crate) const ENTITY: &str = "consumer";

pub async fn add(ctx: &Ctx, req: &ConsumerRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::POST, &[RESOURCE], Some(req))
        .await?
        .expect(StatusCode::CREATED, "add consumer")?;
    render_created(ctx.options, &reply, ENTITY, |c: &ConsumerResponse| c.id.clone())
}

pub async fn query(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::OK, "query consumer", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn list(ctx: &Ctx) -> Result<String, CliError> {
    let reply = ctx
        .get(&[RESOURCE])
        .await?
        .expect(StatusCode::OK, "list consumers")?;
    render_list(ctx.options, &reply, "consumer list", "No consumers", |c: &ConsumerResponse| {
        format!("{}: {}", c.id, describe(c))
    })
}

pub async fn update(ctx: &Ctx, id: &str, req: &ConsumerRequest) -> Result<String, CliError> {
    let reply = ctx
        .send(Method::PATCH, &[RESOURCE, id], Some(req))
        .await?
        .expect_found(StatusCode::OK, "patch consumer", ENTITY)?;
    render_one(ctx.options, &reply, summary)
}

pub async fn delete(ctx: &Ctx, id: &str) -> Result<String, CliError> {
    let reply = ctx
        .delete(&[RESOURCE, id])
        .await?
        .expect_found(StatusCode::NO_CONTENT, "delete consumer", ENTITY)?;
    Ok(render_deleted(ctx.options, &reply))
}

fn summary(consumer: &ConsumerResponse) -> String {
    format!("consumer: {}", describe(consumer))
}

fn describe(consumer: &ConsumerResponse) -> String {
    format!(
        "{} --> {} ({})",
        text(consumer.custom_id.as_ref()),
        text(consumer.username.as_ref()),
        bracketed(consumer.tags.as_ref())
    )
}
