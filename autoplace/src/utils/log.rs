use tracing::metadata::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[cfg(feature = "file-log")]
pub mod file;

/// Keeps the log forwarding worker alive. Dropping it flushes buffered lines.
#[must_use]
pub struct LogGuard {
    #[cfg(feature = "file-log")]
    _file: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Logs to stderr, filtered by `RUST_LOG` (default `info`), and to the log file when built with
/// `file-log`.
pub fn setup_logging() -> LogGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let stderr = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let subscriber = tracing_subscriber::registry().with(filter).with(stderr);

    #[cfg(feature = "file-log")]
    let (subscriber, file_guard) = file::add_layer(subscriber);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
    }

    LogGuard {
        #[cfg(feature = "file-log")]
        _file: file_guard,
    }
}
