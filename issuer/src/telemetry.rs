//! Tracing subscriber setup shared by the binaries

use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

use crate::types::Environment;

/// Installs the global subscriber
///
/// JSON output for staging/production, regular format for development.
/// `RUST_LOG` directives refine the environment's default level.
pub fn init(environment: &Environment) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();

    if environment.json_logs() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}
