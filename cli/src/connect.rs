//! Client construction from CLI arguments, config file and stored session.

use std::time::Duration;

use tienda_cli::{parse_auth_mode, CliConfig, FileSessionStore, Result};
use tienda_link::{TiendaClient, TiendaLinkTimeouts};

use crate::args::Cli;

const DEFAULT_URL: &str = "http://localhost:3001/api";

/// Build the timeout configuration from CLI arguments
fn build_timeouts(cli: &Cli, config: &CliConfig) -> TiendaLinkTimeouts {
    if cli.fast_timeouts {
        return TiendaLinkTimeouts::fast();
    }
    if cli.relaxed_timeouts {
        return TiendaLinkTimeouts::relaxed();
    }

    let request_secs = if cli.timeout != 30 {
        cli.timeout
    } else {
        config.resolved_server().timeout
    };

    TiendaLinkTimeouts::default()
        .with_connection_timeout(Duration::from_secs(cli.connection_timeout))
        .with_request_timeout(Duration::from_secs(request_secs))
}

/// Build the API client: explicit flags beat the config file, and the
/// session for the chosen instance is read from the file store.
pub fn create_client(cli: &Cli, config: &CliConfig) -> Result<TiendaClient> {
    let url = cli
        .url
        .clone()
        .or_else(|| config.resolved_server().url)
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    let auth_mode = cli
        .auth_mode
        .as_deref()
        .map(parse_auth_mode)
        .unwrap_or_else(|| config.auth_mode());

    let store = FileSessionStore::new(&cli.instance);

    let client = TiendaClient::builder()
        .base_url(url)
        .auth_mode(auth_mode)
        .timeouts(build_timeouts(cli, config))
        .session_store(store)
        .build()?;

    Ok(client)
}
