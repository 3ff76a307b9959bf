pub mod extract;
pub mod fetch;

pub use extract::CspParser;
pub use fetch::{CspSource, HttpCspSource};
