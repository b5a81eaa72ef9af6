use tracing_subscriber::EnvFilter;

/// Crates whose events reach the terminal.
const CRATE_TARGETS: &[&str] = &["astalg", "astalg_core", "astalg_time"];

/// Install the stderr subscriber.
///
/// Each `-v` raises the level one step from `warn`: info, debug, then
/// trace for three or more. A `RUST_LOG` value replaces the computed
/// filter entirely.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let directives = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
