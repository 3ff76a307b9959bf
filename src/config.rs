use reqwest::Url;
use std::path::Path;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::types::{Cli, OutputFormat};

/// Validated run configuration, read-only once built.
#[derive(Debug, Clone)]
pub struct Options {
    pub input: Option<String>,
    pub list: Option<String>,
    pub stdin: bool,
    pub cidr: bool,
    pub domains: Vec<String>,
    pub concurrency: usize,
    pub timeout: Duration,
    pub rate_limit: Option<u32>,
    pub proxy: Option<String>,
    pub verify_ssl: bool,
    pub output: Option<String>,
    pub format: OutputFormat,
    pub verbose: bool,
    pub silent: bool,
}

impl Options {
    /// Validate CLI arguments. `stdin_piped` tells whether stdin is a pipe
    /// that should be read as a third input source.
    pub fn from_cli(cli: Cli, stdin_piped: bool) -> Result<Self, ConfigError> {
        if cli.silent && cli.verbose {
            return Err(ConfigError::IncompatibleFlags("silent", "verbose"));
        }

        let format = cli.format();
        let input = cli.input.filter(|s| !s.trim().is_empty());
        let list = cli.list.filter(|s| !s.is_empty());

        if input.is_none() && list.is_none() && !stdin_piped {
            return Err(ConfigError::NoInput);
        }

        if let Some(path) = &list
            && let Err(source) = Path::new(path).metadata()
        {
            return Err(ConfigError::InputList {
                path: path.clone(),
                source,
            });
        }

        if cli.concurrency == 0 {
            return Err(ConfigError::NonPositive("concurrency"));
        }

        if cli.timeout == 0 {
            return Err(ConfigError::NonPositive("timeout"));
        }

        if let Some(proxy) = &cli.proxy {
            check_proxy(proxy)?;
        }

        let domains = cli
            .domain
            .iter()
            .map(|d| d.trim().trim_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();

        Ok(Options {
            input,
            list,
            stdin: stdin_piped,
            cidr: cli.cidr,
            domains,
            concurrency: cli.concurrency,
            timeout: Duration::from_secs(cli.timeout),
            rate_limit: (cli.rate_limit > 0).then_some(cli.rate_limit),
            proxy: cli.proxy,
            verify_ssl: cli.verify_ssl,
            output: cli.output.filter(|s| !s.is_empty()),
            format,
            verbose: cli.verbose,
            silent: cli.silent,
        })
    }
}

#[cfg(test)]
impl Options {
    pub(crate) fn for_tests() -> Self {
        Options {
            input: Some("example.com".to_string()),
            list: None,
            stdin: false,
            cidr: false,
            domains: Vec::new(),
            concurrency: 4,
            timeout: Duration::from_secs(3),
            rate_limit: None,
            proxy: None,
            verify_ssl: false,
            output: None,
            format: OutputFormat::Plain,
            verbose: false,
            silent: true,
        }
    }
}

fn check_proxy(proxy: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidProxy {
        url: proxy.to_string(),
        reason,
    };

    let url = Url::parse(proxy).map_err(|e| invalid(e.to_string()))?;
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(())
}
