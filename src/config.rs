//! Command-line and environment configuration.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// In-memory User/Department REST service.
#[derive(Debug, Clone, Parser)]
#[command(name = "userdept", version)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "USERDEPT_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Mailbox capacity of each store actor.
    #[arg(
        long,
        env = "USERDEPT_CHANNEL_CAPACITY",
        default_value_t = 32,
        value_parser = parse_capacity
    )]
    pub channel_capacity: usize,

    /// JSON file with departments and users to pre-load. Replaces the built-in departments.
    #[arg(long, env = "USERDEPT_SEED_FILE", value_name = "path")]
    pub seed_file: Option<PathBuf>,

    /// Reject patches that reference an unknown department with 422.
    #[arg(long, env = "USERDEPT_STRICT_DEPARTMENT_REFS", default_value_t = false)]
    pub strict_department_refs: bool,

    /// Emit logs as JSON lines.
    #[arg(long, env = "USERDEPT_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

/// Store mailboxes need room for at least one request.
fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".into()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}
