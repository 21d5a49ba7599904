//! Logging setup

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the level; otherwise `debug` enables debug output
/// for this crate and everything else stays at `info`.
pub fn init(debug: bool) {
    let default = if debug {
        "info,loading_overlay=debug,loading_overlay_demo=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
