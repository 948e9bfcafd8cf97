#![deny(clippy::all, clippy::pedantic)]

use std::fmt::Write as _;

use kconf_api_types::ListResponse;
use serde::de::DeserializeOwned;

use crate::client::{CliError, Options, Reply};

const STATUS_LABEL: &str = "http response status code: ";

/// Renders the reply to an add as the id of the new entity.
///
/// Verbose output labels both lines: `new <entity> ID: <id>`.
pub fn render_created<T: DeserializeOwned>(
    options: Options,
    reply: &Reply,
    entity: &str,
    id: impl FnOnce(&T) -> String,
) -> Result<String, CliError> {
    if options.json_output {
        return Ok(raw(reply));
    }
    let value: T = reply.parse()?;
    let id = id(&value);
    if options.verbose {
        Ok(format!("{}\nnew {entity} ID: {id}\n", status_line(reply)))
    } else {
        Ok(format!("{id}\n"))
    }
}

/// Renders a single-entity reply as one summary line.
///
/// JSON output echoes the status line and raw body without parsing; otherwise
/// the body is decoded into `T` and summarised, with the status line in front
/// when verbose.
pub fn render_one<T: DeserializeOwned>(
    options: Options,
    reply: &Reply,
    summary: impl FnOnce(&T) -> String,
) -> Result<String, CliError> {
    if options.json_output {
        return Ok(raw(reply));
    }
    let value: T = reply.parse()?;
    Ok(with_status(options, reply, &summary(&value)))
}

/// Renders a `{"data": [...]}` reply, one row per entry. Verbose output puts
/// `title` under the status line.
pub fn render_list<T: DeserializeOwned>(
    options: Options,
    reply: &Reply,
    title: &str,
    empty: &str,
    row: impl Fn(&T) -> String,
) -> Result<String, CliError> {
    if options.json_output {
        return Ok(raw(reply));
    }
    let list: ListResponse<T> = reply.parse()?;
    if list.data.is_empty() {
        return Ok(with_status(options, reply, empty));
    }

    let mut out = String::new();
    if options.verbose {
        let _ = writeln!(out, "{}\n{title}", status_line(reply));
    }
    for item in &list.data {
        let _ = writeln!(out, "{}", row(item));
    }
    Ok(out)
}

/// Delete replies have no body worth showing.
pub fn render_deleted(options: Options, reply: &Reply) -> String {
    if options.json_output {
        format!("{}\n{{}}\n", reply.status)
    } else if options.verbose {
        format!("{}\n", status_line(reply))
    } else {
        String::new()
    }
}

pub fn raw(reply: &Reply) -> String {
    format!("{}\n{}\n", reply.status, reply.body)
}

fn status_line(reply: &Reply) -> String {
    format!("{STATUS_LABEL}{}", reply.status)
}

fn with_status(options: Options, reply: &Reply, line: &str) -> String {
    if options.verbose {
        format!("{}\n{line}\n", status_line(reply))
    } else {
        format!("{line}\n")
    }
}

/// Formats a list the way the summaries show them: `[a b c]`.
pub fn bracketed(values: Option<&Vec<String>>) -> String {
    format!("[{}]", values.map(|v| v.join(" ")).unwrap_or_default())
}

pub fn text(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}
