use tracing::Level;

/// Installs the global tracing subscriber.
///
/// Log lines go to stderr so that `--stdout` output stays a clean CSV.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
