use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. Silent mode installs nothing so only
/// results reach the terminal; `RUST_LOG` overrides the flag-derived level.
pub fn setup_logging(verbose: bool, silent: bool) {
    if silent {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("csprecon=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
