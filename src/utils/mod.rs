pub mod cidr;
pub mod rate;
pub mod url;

pub use cidr::expand_cidr;
pub use rate::RateLimiter;
pub use url::prepare_url;
