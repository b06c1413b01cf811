use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a filter for the workspace crates.
pub fn filter_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,dashboard_core={level},dashboard_cli={level}")
}

/// Log to stderr so stdout only carries the dashboard itself. `RUST_LOG` wins.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
