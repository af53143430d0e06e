//! One autoplace run: pick the layout of the current resolution and execute it.
use crate::errors::Fatal;
use crate::Config;
use autoplace_core::{
    Clock, Launcher, Notifier, Session, SessionSummary, Urgency, WindowManager,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

const SUMMARY: &str = "autoplace";

/// Runs the layout matching the screen of `wm`.
///
/// The resolution is looked up before any window manager control request, so a missing layout
/// leaves the desktop untouched.
///
/// # Errors
///
/// Returns the first fatal error of the session.
pub fn run_session<W, L, C>(
    config: &Config,
    wm: W,
    launcher: L,
    clock: C,
    notifier: &dyn Notifier,
    interrupted: Arc<AtomicBool>,
) -> Result<SessionSummary, Fatal>
where
    W: WindowManager,
    L: Launcher,
    C: Clock,
{
    let screen = wm.screen_resolution()?;
    tracing::info!("Detected screen resolution {}", screen);
    let steps = config.layout_for(screen)?;

    notifier.notify(
        Urgency::Low,
        SUMMARY,
        &format!("Arranging the {screen} layout ({} steps)", steps.len()),
    );

    let mut session =
        Session::new(wm, launcher, clock, screen, config.grid()).with_interrupt_flag(interrupted);
    session.correlator = config.correlator();
    session.placement = config.placement();

    let summary = session.run(steps)?;
    tracing::info!(
        "Layout {} done: {} launched ({} matched by pid), {} placed, {} workspace moves",
        screen,
        summary.launched,
        summary.matched,
        summary.placed,
        summary.workspace_moves
    );
    notifier.notify(
        Urgency::Normal,
        SUMMARY,
        &format!("{} applications placed", summary.placed),
    );
    Ok(summary)
}

/// Logs the outcome, notifies about failures and returns the process exit code.
pub fn report(result: &Result<SessionSummary, Fatal>, notifier: &dyn Notifier) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            tracing::error!("{}", err);
            notifier.notify(Urgency::Critical, SUMMARY, &err.to_string());
            err.exit_code()
        }
    }
}
