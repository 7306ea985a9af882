use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "news_reader=debug,warn"
    } else {
        "news_reader=info,warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // stdout carries the article list
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        // Already installed; the existing subscriber keeps receiving events
        tracing::debug!("Tracing subscriber not replaced: {}", e);
    }
}
