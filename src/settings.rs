//! Connection settings resolved from the global options.

#![deny(clippy::all, clippy::pedantic)]

use url::Url;

use crate::args::Cli;
use crate::client::{CliError, Options};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: Url,
    pub options: Options,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Ok(Self {
            server_url: server_url(&cli.kong_address, cli.port)?,
            options: Options {
                verbose: cli.verbose,
                json_output: cli.json_output,
            },
        })
    }
}

/// Base URL of the admin API.
///
/// A bare host becomes `http://host:port`. An address that already carries a
/// scheme is taken as is, gaining `port` only when it names none. Port `0`
/// never gets written into the URL.
pub fn server_url(address: &str, port: u16) -> Result<Url, CliError> {
    if address.contains("://") {
        let mut url = Url::parse(address)?;
        if url.port().is_none() && port != 0 {
            url.set_port(Some(port))
                .map_err(|()| CliError::usage(format!("cannot set a port on {address}")))?;
        }
        return Ok(url);
    }

    let url = if port == 0 {
        Url::parse(&format!("http://{address}"))?
    } else {
        Url::parse(&format!("http://{address}:{port}"))?
    };
    Ok(url)
}
