//! Authentication credentials nested under a consumer:
//! `consumers/{id}/basic-auth`, `consumers/{id}/key-auth` and `consumers/{id}/jwt`.

#![deny(clippy::all, clippy::pedantic)]

use std::marker::PhantomData;

use kconf_api_types::{
    BasicAuthRequest, BasicAuthResponse, JwtRequest, JwtResponse, KeyAuthRequest,
    KeyAuthResponse,
};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::{CliError, Ctx};
use crate::handlers::consumers;
use crate::print::{render_created, render_deleted, render_list, text};

/// Response shape of one credential family.
trait Credential: DeserializeOwned {
    fn id(&self) -> &str;
    fn summary(&self) -> String;
}

impl Credential for BasicAuthResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!("{}: {}", self.id, text(self.username.as_ref()))
    }
}

impl Credential for KeyAuthResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        let ttl = self
            .ttl
            .map_or_else(|| "none".to_string(), |t| t.to_string());
        format!("{}: {} (ttl: {ttl})", self.id, text(self.key.as_ref()))
    }
}

impl Credential for JwtResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!(
            "{}: {} - key: {}",
            self.id,
            text(self.algorithm.as_ref()),
            text(self.key.as_ref())
        )
    }
}

struct Kind<R> {
    path: &'static str,
    label: &'static str,
    title: &'static str,
    empty: &'static str,
    _response: PhantomData<R>,
}

const BASIC_AUTH: Kind<BasicAuthResponse> = Kind {
    path: "basic-auth",
    label: "consumer basic auth",
    title: "consumer basic auth list",
    empty: "No basic auth credentials",
    _response: PhantomData,
};

const KEY_AUTH: Kind<KeyAuthResponse> = Kind {
    path: "key-auth",
    label: "consumer key auth",
    title: "consumer key auth list",
    empty: "No key auth credentials",
    _response: PhantomData,
};

const JWT: Kind<JwtResponse> = Kind {
    path: "jwt",
    label: "consumer jwt",
    title: "consumer jwt list",
    empty: "No jwt credentials",
    _response: PhantomData,
};

pub async fn add_basic_auth(
    ctx: &Ctx,
    consumer_id: &str,
    req: &BasicAuthRequest,
) -> Result<String, CliError> {
    add(ctx, &BASIC_AUTH, consumer_id, req).await
}

pub async fn query_basic_auth(ctx: &Ctx, consumer_id: &str) -> Result<String, CliError> {
    query(ctx, &BASIC_AUTH, consumer_id).await
}

pub async fn delete_basic_auth(
    ctx: &Ctx,
    consumer_id: &str,
    credential_id: &str,
) -> Result<String, CliError> {
    delete(ctx, &BASIC_AUTH, consumer_id, credential_id).await
}

pub async fn add_key_auth(
    ctx: &Ctx,
    consumer_id: &str,
    req: &KeyAuthRequest,
) -> Result<String, CliError> {
    add(ctx, &KEY_AUTH, consumer_id, req).await
}

pub async fn query_key_auth(ctx: &Ctx, consumer_id: &str) -> Result<String, CliError> {
    query(ctx, &KEY_AUTH, consumer_id).await
}

pub async fn delete_key_auth(
    ctx: &Ctx,
    consumer_id: &str,
    credential_id: &str,
) -> Result<String, CliError> {
    delete(ctx, &KEY_AUTH, consumer_id, credential_id).await
}

pub async fn add_jwt(ctx: &Ctx, consumer_id: &str, req: &JwtRequest) -> Result<String, CliError> {
    add(ctx, &JWT, consumer_id, req).await
}

pub async fn query_jwt(ctx: &Ctx, consumer_id: &str) -> Result<String, CliError> {
    query(ctx, &JWT, consumer_id).await
}

pub async fn delete_jwt(
    ctx: &Ctx,
    consumer_id: &str,
    credential_id: &str,
) -> Result<String, CliError> {
    delete(ctx, &JWT, consumer_id, credential_id).await
}

async fn add<B, R>(
    ctx: &Ctx,
    kind: &Kind<R>,
    consumer_id: &str,
    req: &B,
) -> Result<String, CliError>
where
    B: Serialize,
    R: Credential,
{
    let reply = ctx
        .send(
            Method::POST,
            &[consumers::RESOURCE, consumer_id, kind.path],
            Some(req),
        )
        .await?
        .expect_found(
            StatusCode::CREATED,
            &format!("add {}", kind.label),
            consumers::ENTITY,
        )?;
    render_created(ctx.options, &reply, kind.label, |c: &R| c.id().to_string())
}

async fn query<R: Credential>(
    ctx: &Ctx,
    kind: &Kind<R>,
    consumer_id: &str,
) -> Result<String, CliError> {
    let reply = ctx
        .get(&[consumers::RESOURCE, consumer_id, kind.path])
        .await?
        .expect_found(
            StatusCode::OK,
            &format!("query {}", kind.label),
            consumers::ENTITY,
        )?;
    render_list(ctx.options, &reply, kind.title, kind.empty, R::summary)
}

async fn delete<R>(
    ctx: &Ctx,
    kind: &Kind<R>,
    consumer_id: &str,
    credential_id: &str,
) -> Result<String, CliError> {
    let reply = ctx
        .delete(&[consumers::RESOURCE, consumer_id, kind.path, credential_id])
        .await?
        .expect_found(
            StatusCode::NO_CONTENT,
            &format!("delete {}", kind.label),
            kind.label,
        )?;
    Ok(render_deleted(ctx.options, &reply))
}
