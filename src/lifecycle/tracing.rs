//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber.
//!
//! - **Levels** come from `RUST_LOG`, defaulting to `info`
//! - **Compact format** hides the module prefix (`with_target(false)`); store
//!   logs carry an `entity_type` field instead
//! - **JSON format** (`--log-json`) for log shippers
//!
//! ```bash
//! RUST_LOG=info cargo run                  # lifecycle + mutations
//! RUST_LOG=debug cargo run                 # every store request, with payloads
//! RUST_LOG=store_actor=debug cargo run     # only the store engine
//! ```
//!
//! With `RUST_LOG=info` a patch looks like:
//!
//! ```text
//! INFO Actor started entity_type="User" size=0
//! WARN patch_user{id=1}:patch{id=1}: Unknown department, reference left unchanged id=1 department_id=9
//! INFO Updated entity_type="User" id=1 size=1
//! ```

use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. A second call only logs a warning.
pub fn setup_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if json {
        builder.json().try_init()
    } else {
        builder
            .with_target(false) // entity_type identifies the store instead
            .compact()
            .try_init()
    };

    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
