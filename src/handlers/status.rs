#![deny(clippy::all, clippy::pedantic)]

use std::fmt::Write as _;

use kconf_api_types::StatusResponse;
use reqwest::StatusCode;

use crate::client::{CliError, Ctx};
use crate::print::raw;

const RESOURCE: &str = "status";

pub async fn check(ctx: &Ctx) -> Result<String, CliError> {
    let reply = ctx.get(&[RESOURCE]).await?;
    if reply.status != StatusCode::OK {
        return Err(CliError::Status(reply.status));
    }
    if ctx.options.json_output {
        return Ok(raw(&reply));
    }

    let mut out = format!("{}\n", reply.status);
    if ctx.options.verbose {
        // Older gateways answer with an empty body.
        if let Ok(StatusResponse {
            database: Some(db),
        }) = reply.parse::<StatusResponse>()
        {
            let _ = writeln!(out, "database reachable: {}", db.reachable);
        }
    }
    Ok(out)
}
