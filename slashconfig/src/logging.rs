//! Diagnostic tracing for hosts that want to watch field updates.
//!
//! Every operation on [`Configurable`](crate::Configurable) emits a `trace`
//! event carrying the field name. Nothing is emitted at `warn` or above: the
//! crate never fails on its own account, and errors from caller closures are
//! returned untouched.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a tracing subscriber for development logging.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr in compact
/// format. Calling this after a global subscriber is set does nothing.
///
/// # Example
/// ```bash
/// RUST_LOG=slashconfig=trace cargo test
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
