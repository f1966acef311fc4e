//! Logger setup
//!
//! Logs go to stderr so a successful run prints nothing on stdout. The
//! default level is `warn`, `--verbose` raises it to `info`, and
//! `PORTAL_BUNDLE_LOG` overrides both with `env_logger` filter syntax.

use std::io::Write;

/// Environment variable holding an `env_logger` filter string
pub const LOG_ENV: &str = "PORTAL_BUNDLE_LOG";

pub fn default_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    }
}

pub fn setup_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter(None, default_level(verbose));
    if let Ok(filters) = std::env::var(LOG_ENV) {
        builder.parse_filters(&filters);
    }
    builder.init();
}
