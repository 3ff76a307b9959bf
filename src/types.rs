use clap::Parser;

use crate::constants::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Discover new target domains using Content Security Policy.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // INPUT
    /// Input domain or URL.
    #[arg(short = 'u', long = "url", help_heading = "INPUT")]
    pub input: Option<String>,

    /// File containing input domains, one per line.
    #[arg(short = 'l', long = "list", help_heading = "INPUT")]
    pub list: Option<String>,

    /// Treat inputs as CIDR ranges and expand them into addresses.
    #[arg(long, help_heading = "INPUT")]
    pub cidr: bool,

    // CONFIGURATIONS
    /// Filter results belonging to these domains (comma separated).
    #[arg(short, long, value_delimiter = ',', help_heading = "CONFIGURATIONS")]
    pub domain: Vec<String>,

    /// Concurrency level.
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY, help_heading = "CONFIGURATIONS")]
    pub concurrency: usize,

    /// Connection timeout in seconds.
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT, help_heading = "CONFIGURATIONS")]
    pub timeout: u64,

    /// Limit requests per second (0 for unlimited).
    #[arg(long, default_value_t = 0, help_heading = "CONFIGURATIONS")]
    pub rate_limit: u32,

    // NETWORK
    /// Use a proxy for requests (e.g., "http://127.0.0.1:8080").
    #[arg(short = 'x', long, help_heading = "NETWORK")]
    pub proxy: Option<String>,

    /// Verify SSL certificates (default: false, insecure).
    #[arg(long, default_value_t = false, help_heading = "NETWORK")]
    pub verify_ssl: bool,

    // OUTPUT
    /// File to write output results.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub output: Option<String>,

    /// Output in JSON format, one object per line.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub json: bool,

    /// Verbose output.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,

    /// Silent output. Print only results.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub silent: bool,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,
}

impl Cli {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}

/// One processed unit travelling from the worker pool to the output drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResult {
    /// A single domain, deduplicated by the drain.
    Domain(String),
    /// Everything found for one URL; never deduplicated.
    Record { url: String, domains: Vec<String> },
}
