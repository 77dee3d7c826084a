use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber; `RUST_LOG` overrides `default_directive`
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
