use colored::*;
use std::sync::Once;

const BANNER: &str = r"    ______________  ________  _________  ____
   / ___/ ___/ __ \/ ___/ _ \/ ___/ __ \/ __ \
  / /__(__  ) /_/ / /  /  __/ /__/ /_/ / / / /
  \___/____/ .___/_/   \___/\___/\____/_/ /_/
          /_/";

static SHOWN: Once = Once::new();

/// Print the banner to stderr, at most once per process.
pub fn show_banner() {
    SHOWN.call_once(|| {
        eprintln!(
            "{}{}\n",
            BANNER.cyan().bold(),
            format!("v{}", env!("CARGO_PKG_VERSION")).yellow()
        );
        eprintln!("\t\tDiscover new target domains using Content Security Policy\n");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_banner_twice() {
        show_banner();
        show_banner();
        assert!(SHOWN.is_completed());
    }
}
