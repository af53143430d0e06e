use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use xdg::BaseDirectories;

const LOG_FILE_NAME: &str = "autoplace.log";

/// Adds a plain-text layer writing to `$XDG_CACHE_HOME/autoplace/autoplace.log`.
///
/// When the cache directory is unusable the subscriber is returned without it.
pub fn add_layer<S>(
    subscriber: S,
) -> (
    impl Subscriber + for<'span> LookupSpan<'span>,
    Option<WorkerGuard>,
)
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let (layer, guard) = match get_log_writer() {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer),
            ),
            Some(guard),
        ),
        None => (None, None),
    };
    (subscriber.with(layer), guard)
}

fn log_path() -> Option<PathBuf> {
    let xdg = BaseDirectories::with_prefix("autoplace").ok()?;
    match xdg.place_cache_file(LOG_FILE_NAME) {
        Ok(path) => Some(path),
        Err(err) => {
            eprintln!("Couldn't create log directory: {err}");
            None
        }
    }
}

fn get_log_writer() -> Option<(NonBlocking, WorkerGuard)> {
    let path = log_path()?;
    let dir = path.parent()?;
    let writer = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    Some(tracing_appender::non_blocking(writer))
}
