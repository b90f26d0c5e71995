/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialise `env_logger`, honouring `RUST_LOG` when present.
///
/// Logs go to stderr so they never interleave with the live summary on stdout.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(env_logger::Target::Stderr)
        .init();
}
