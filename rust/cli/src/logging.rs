use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr fmt subscriber once per process.
///
/// Later calls are no-ops, so `run()` can be invoked repeatedly from tests.
pub fn init_logging() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();

        // A host may already have installed its own subscriber.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
