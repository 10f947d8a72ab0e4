//! Diagnostic logging.
//!
//! Error details and request traces go to stderr through `tracing`, so they
//! never mix with the rendered albums on stdout. User-facing status lines use
//! the `info!`/`success!`/`warning!`/`error!` macros instead.

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "albumgrid=warn,warn";
const VERBOSE_FILTER: &str = "albumgrid=debug,reqwest=info,warn";

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is set.
pub fn init_logging(verbose: bool) -> crate::Res<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
