//! Command-line surface for `kconf`.
//!
//! Only the global options are declared to clap; the verb, the entity and
//! their `--flag=value` tokens are collected verbatim and dispatched by
//! [`crate::commands`].

#![deny(clippy::all, clippy::pedantic)]

use clap::Parser;

pub const DEFAULT_KONG_ADDRESS: &str = "localhost";
pub const DEFAULT_KONG_PORT: u16 = 8001;

#[derive(Parser, Debug)]
#[command(
    name = "kconf",
    version,
    about = "Kong gateway configuration tool",
    long_about = None,
    after_help = "Commands: status | add | query | list | update | delete <entity> [--flag=value ...]"
)]
pub struct Cli {
    /// Kong admin API host, or a full base URL such as <http://kong:8001>
    #[arg(long, default_value = DEFAULT_KONG_ADDRESS, value_name = "HOST")]
    pub kong_address: String,

    /// Kong admin API port (0 keeps the address as given)
    #[arg(long, default_value_t = DEFAULT_KONG_PORT)]
    pub port: u16,

    /// Print the raw status line and response body
    #[arg(long, default_value_t = false)]
    pub json_output: bool,

    /// Print the HTTP status line before the result
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Verb, entity and `--flag=value` options
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}
