pub mod banner;
pub mod formatter;
pub mod seen;
pub mod sink;

pub use banner::show_banner;
pub use formatter::format_json;
pub use seen::SeenSet;
pub use sink::OutputSink;
