use autoplace::app::{report, run_session};
use autoplace::errors::Fatal;
use autoplace::notify::{NotifySend, Notifications};
use autoplace::utils::file_handler::load_config_file;
use autoplace::{cli, Backend, Config, Problem};
use autoplace_core::{DetachedLauncher, SessionSummary, SystemClock, WindowManager};
use signal_hook::consts::TERM_SIGNALS;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

fn main() {
    let args = cli::parse(std::env::args());
    let log_guard = autoplace::utils::log::setup_logging();
    tracing::info!("autoplace {} starting", env!("CARGO_PKG_VERSION"));

    let interrupted = register_shutdown_hook();
    let mut notifications = Notifications::new(!args.disable_notifications, NotifySend);

    let result = load_config_file(args.config.as_deref())
        .map_err(Fatal::Config)
        .and_then(|config| {
            if !config.notifications {
                notifications.disable();
            }
            tracing::debug!("Desktop notifications enabled: {}", notifications.is_enabled());
            start(&config, &notifications, interrupted)
        });
    let code = report(&result, &notifications);

    // Flush the log file before leaving, `exit` does not run destructors.
    drop(log_guard);
    std::process::exit(code);
}

/// The first SIGINT/SIGTERM/SIGHUP asks the session to stop after the current wait; a second
/// one terminates immediately.
fn register_shutdown_hook() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    for &signal in TERM_SIGNALS {
        let registered = signal_hook::flag::register_conditional_shutdown(
            signal,
            autoplace::errors::INTERRUPTED_EXIT_CODE,
            flag.clone(),
        )
        .and_then(|_| signal_hook::flag::register(signal, flag.clone()));
        if let Err(err) = registered {
            tracing::error!("Cannot register handler for signal {}: {:?}", signal, err);
        }
    }
    flag
}

fn start(
    config: &Config,
    notifications: &Notifications<NotifySend>,
    interrupted: Arc<AtomicBool>,
) -> Result<SessionSummary, Fatal> {
    if config.problems().contains(&Problem::EmptyGrid) {
        return Err(Fatal::Config(anyhow::anyhow!("{}", Problem::EmptyGrid)));
    }

    let wm = connect(config.backend)?;
    let clock = SystemClock::new(interrupted.clone());
    run_session(
        config,
        wm.as_ref(),
        DetachedLauncher::new(),
        clock,
        notifications,
        interrupted,
    )
}

fn connect(backend: Backend) -> Result<Box<dyn WindowManager>, Fatal> {
    match backend {
        #[cfg(feature = "x11rb")]
        Backend::X11rb => {
            tracing::info!("Loading x11rb backend");
            let wm = x11rb_display_server::X11rbDisplayServer::connect()
                .map_err(|e| Fatal::Backend(e.to_string()))?;
            Ok(Box::new(wm))
        }
        #[cfg(feature = "wmctrl")]
        Backend::Wmctrl => {
            tracing::info!("Loading wmctrl backend");
            Ok(Box::new(wmctrl_display_server::WmctrlDisplayServer::new()))
        }
        #[allow(unreachable_patterns)]
        other => Err(Fatal::Backend(format!(
            "backend {other:?} is not compiled in (features:{})",
            env!("AUTOPLACE_FEATURES")
        ))),
    }
}
