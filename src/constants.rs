/// Runner defaults
pub const DEFAULT_CONCURRENCY: usize = 100;
pub const DEFAULT_TIMEOUT: u64 = 10;

/// HTTP constants
pub const DEFAULT_REDIRECT_LIMIT: usize = 10;
pub const TCP_KEEPALIVE_SECS: u64 = 30;
pub const DEFAULT_SCHEME: &str = "http://";

/// Inputs shorter than this are never valid targets
pub const MIN_URL_LENGTH: usize = 4;

/// CSP parsing constants
pub const DOMAIN_REGEX: &str = r"(?i)(?:[_a-z0-9*](?:[_a-z0-9*-]{0,61}[a-z0-9])?\.)+(?:[a-z](?:[a-z0-9-]{0,61}[a-z0-9]))+";
pub const META_HTTP_EQUIV_SELECTOR: &str = "meta[http-equiv]";

/// Time conversion constants
pub const MICROSECONDS_PER_SECOND: u64 = 1_000_000;

/// Browser user agents, one is picked per run
pub const USER_AGENTS: [&str; 6] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0",
];
