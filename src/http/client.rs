use anyhow::Result;
use rand::seq::SliceRandom;
use reqwest::{Client, redirect::Policy};
use std::time::Duration;
use tracing::debug;

use crate::config::Options;
use crate::constants::{DEFAULT_REDIRECT_LIMIT, TCP_KEEPALIVE_SECS, USER_AGENTS};

/// Build the HTTP client shared by every worker
pub fn build_http_client(options: &Options) -> Result<Client> {
    let mut client_builder = Client::builder()
        .timeout(options.timeout)
        .connect_timeout(options.timeout)
        .tcp_keepalive(Duration::from_secs(TCP_KEEPALIVE_SECS))
        .redirect(Policy::limited(DEFAULT_REDIRECT_LIMIT))
        .user_agent(random_user_agent());

    // Disable SSL verification by default
    if !options.verify_ssl {
        client_builder = client_builder.danger_accept_invalid_certs(true);
    }

    if let Some(proxy_url) = &options.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)?;
        client_builder = client_builder.proxy(proxy);
        debug!("Using proxy {}", proxy_url);
    }

    Ok(client_builder.build()?)
}

/// Pick a browser user agent for this run
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}
