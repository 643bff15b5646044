use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a console subscriber for applications that have none.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (for example
/// `"cloudlogger=debug"`) is applied. Calling this more than once, or after
/// the host installed its own subscriber, leaves the existing one in place.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("cloudlogger=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .try_init();
}
