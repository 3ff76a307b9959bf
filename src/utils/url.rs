use reqwest::Url;
use std::net::IpAddr;

use crate::constants::{DEFAULT_SCHEME, MIN_URL_LENGTH};
use crate::errors::TargetError;

/// Turn a raw target into the URL that gets requested: `http://` is added
/// when no scheme is present, query and fragment are dropped.
pub fn prepare_url(input: &str) -> Result<String, TargetError> {
    let malformed = || TargetError::MalformedUrl(input.to_string());

    let trimmed = input.trim();
    if trimmed.len() < MIN_URL_LENGTH {
        return Err(malformed());
    }

    let raw = if trimmed.contains("://") {
        trimmed.to_string()
    } else if let Ok(IpAddr::V6(addr)) = trimmed.parse::<IpAddr>() {
        format!("{}[{}]", DEFAULT_SCHEME, addr)
    } else {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    };

    let url = Url::parse(&raw).map_err(|_| malformed())?;
    let host = url.host_str().filter(|h| !h.is_empty()).ok_or_else(malformed)?;

    // The parser drops a port equal to the scheme default, keep it when typed
    let port = url
        .port()
        .or_else(|| has_explicit_port(&raw).then(|| url.port_or_known_default()).flatten());
    let authority = match port {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    // The parser always reports "/" for an empty path
    let path = if url.path() == "/" && !has_explicit_path(&raw) {
        ""
    } else {
        url.path()
    };

    Ok(format!("{}://{}{}", url.scheme(), authority, path))
}

fn has_explicit_port(raw: &str) -> bool {
    let Some((_, rest)) = raw.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    host_port
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
}

fn has_explicit_path(raw: &str) -> bool {
    raw.split_once("://")
        .is_some_and(|(_, rest)| rest.contains('/'))
}
