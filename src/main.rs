//! kconf: Kong gateway configuration through the admin API.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod commands;
mod flags;
mod handlers;
mod print;
mod settings;
mod telemetry;


use std::process::ExitCode;

use clap::Parser;

use args::Cli;
use client::{CliError, Ctx};
use settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("[error] {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<String, CliError> {
    telemetry::init()?;
    let settings = Settings::from_cli(cli)?;
    tracing::debug!(server = %settings.server_url, "kong admin endpoint");
    let ctx = Ctx::new(settings.server_url, settings.options)?;
    commands::run(&ctx, &cli.command).await
}
