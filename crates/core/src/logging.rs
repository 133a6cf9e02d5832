//! Logging initialization and configuration.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logging system with tracing.
///
/// Filtering comes from `RUST_LOG` when set; otherwise the workspace
/// crates log at debug and everything else at info.
///
/// # Example
/// ```
/// mstack_core::init_logging();
/// tracing::info!("scene walk starting");
/// ```
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mstack_scene=debug,mstack_app=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
